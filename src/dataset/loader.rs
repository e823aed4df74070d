// Delimited-file loader.
//
// Reads a CSV-style file, finds the configured message column and turns each
// cell into a Message. Cell typing is decided per column: a column whose
// non-empty cells all parse as numbers is numeric, anything else is text.
// Empty cells and the usual NA markers are missing values.
//
// A numeric column is an integer column only when every cell is a whole
// number and none is missing. Otherwise it is a float column and every value
// is written in float form, so "42" reads as "42.0".

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use super::message::{format_float, Message};
use crate::error::LoadError;

/// Cell values read as missing rather than as text.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// The extracted message column of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    column: String,
    messages: Vec<Message>,
}

impl Dataset {
    pub fn new<S: Into<String>>(column: S, messages: Vec<Message>) -> Self {
        Self {
            column: column.into(),
            messages,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Total raw character cost of every message.
    pub fn character_count(&self) -> u64 {
        self.messages.iter().map(|m| m.char_len() as u64).sum()
    }
}

/// Load the `column` of the delimited file at `path`.
pub fn load_messages(path: &Path, column: &str, delimiter: u8) -> Result<Dataset, LoadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(LoadError::Read(e.into())),
    };

    let dataset = read_from(file, &path.display().to_string(), column, delimiter)?;
    info!(
        path = %path.display(),
        column,
        rows = dataset.len(),
        "Loaded dataset"
    );
    Ok(dataset)
}

/// Same as [`load_messages`] for any reader (in-memory data, stdin, ...).
pub fn read_messages<R: Read>(reader: R, column: &str, delimiter: u8) -> Result<Dataset, LoadError> {
    read_from(reader, "<input>", column, delimiter)
}

fn read_from<R: Read>(
    reader: R,
    origin: &str,
    column: &str,
    delimiter: u8,
) -> Result<Dataset, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(LoadError::Empty(origin.to_string()));
    }

    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| LoadError::MissingColumn {
            column: column.to_string(),
            available: headers.iter().map(String::from).collect(),
        })?;

    let mut cells: Vec<Option<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cell = record
            .get(index)
            .filter(|value| !NA_VALUES.contains(value))
            .map(String::from);
        cells.push(cell);
    }

    let kind = ColumnKind::infer(&cells);
    debug!(column, ?kind, "Inferred message column type");

    let messages = cells
        .into_iter()
        .map(|cell| match cell {
            None => Message::Missing,
            Some(value) => kind.message(value),
        })
        .collect();

    Ok(Dataset::new(column, messages))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Text,
    Integer,
    Float,
}

impl ColumnKind {
    /// A column is numeric when it has at least one value and every value
    /// parses as a number.
    fn infer(cells: &[Option<String>]) -> Self {
        let mut values = cells.iter().flatten().peekable();
        if values.peek().is_none() {
            return ColumnKind::Text;
        }
        let values: Vec<&str> = values.map(|v| v.trim()).collect();
        if !values.iter().all(|v| v.parse::<f64>().is_ok()) {
            ColumnKind::Text
        } else if cells.iter().all(Option::is_some)
            && values.iter().all(|v| v.parse::<i64>().is_ok())
        {
            ColumnKind::Integer
        } else {
            ColumnKind::Float
        }
    }

    fn message(self, value: String) -> Message {
        let trimmed = value.trim();
        match self {
            ColumnKind::Text => Message::Text(value),
            ColumnKind::Integer => match trimmed.parse::<i64>() {
                Ok(n) => Message::Number(n.to_string()),
                Err(_) => Message::Number(value),
            },
            ColumnKind::Float => match trimmed.parse::<f64>() {
                Ok(n) => Message::Number(format_float(n)),
                Err(_) => Message::Number(value),
            },
        }
    }
}
