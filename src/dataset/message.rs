// A single cell of the message column.

/// Textual form of a missing cell.
pub const MISSING_TEXT: &str = "nan";

/// One message as it came out of the dataset.
///
/// Only `Text` cells carry words. Numbers and missing values still have a
/// textual representation (they count toward the character total) but are
/// never tokenized.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    /// A numeric cell in its column's canonical form ("42", "42.0", "3.5")
    Number(String),
    Missing,
}

impl Message {
    /// The cell coerced to text. Missing values read as "nan".
    pub fn as_text(&self) -> &str {
        match self {
            Message::Text(s) | Message::Number(s) => s,
            Message::Missing => MISSING_TEXT,
        }
    }

    /// Length of the textual representation in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.as_text().chars().count()
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Message::Text(_))
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message::Text(s.to_string())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Message::Text(s)
    }
}

impl From<i64> for Message {
    fn from(n: i64) -> Self {
        Message::Number(n.to_string())
    }
}

impl From<f64> for Message {
    fn from(n: f64) -> Self {
        Message::Number(format_float(n))
    }
}

/// Float text as a float column prints it: always with a fractional part
/// or exponent ("42.0", "3.5", "1e20").
pub(crate) fn format_float(n: f64) -> String {
    format!("{n:?}")
}

impl<T: Into<Message>> From<Option<T>> for Message {
    fn from(value: Option<T>) -> Self {
        value.map_or(Message::Missing, Into::into)
    }
}
