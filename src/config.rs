use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::DEFAULT_TOP_WORDS;
use crate::error::TopicTableError;
use crate::text::StopWordSource;
use crate::topics::TopicTable;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy; CLI flags
/// override individual values afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Delimited file holding the messages (INPUT_CSV_FILE)
    pub input_file: PathBuf,
    /// Column containing the message text (MESSAGE_COLUMN)
    pub message_column: String,
    /// JSON topic table; the built-in table is used when unset (PARLEY_TOPICS_FILE)
    pub topics_file: Option<PathBuf>,
    /// Stop-word list: nltk, iso, or a file path (PARLEY_STOPWORDS)
    pub stopwords: StopWordSource,
    /// Field delimiter byte (PARLEY_DELIMITER)
    pub delimiter: u8,
    /// Length of the top-word list (PARLEY_TOP_WORDS)
    pub top_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("messages.csv"),
            message_column: "message".to_string(),
            topics_file: None,
            stopwords: StopWordSource::Nltk,
            delimiter: b',',
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key → value source. Unset or blank
    /// keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let delimiter = match get("PARLEY_DELIMITER") {
            Some(raw) => parse_delimiter(&raw).context("Invalid PARLEY_DELIMITER")?,
            None => defaults.delimiter,
        };

        let top_words = match get("PARLEY_TOP_WORDS") {
            Some(raw) => parse_top_words(&raw).context("Invalid PARLEY_TOP_WORDS")?,
            None => defaults.top_words,
        };

        Ok(Self {
            input_file: get("INPUT_CSV_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.input_file),
            message_column: get("MESSAGE_COLUMN").unwrap_or(defaults.message_column),
            topics_file: get("PARLEY_TOPICS_FILE").map(PathBuf::from),
            stopwords: get("PARLEY_STOPWORDS")
                .map(|raw| raw.parse().unwrap_or_default())
                .unwrap_or(defaults.stopwords),
            delimiter,
            top_words,
        })
    }

    /// The configured topic table, or the built-in one.
    pub fn topic_table(&self) -> Result<TopicTable, TopicTableError> {
        match &self.topics_file {
            Some(path) => TopicTable::load(path),
            None => Ok(TopicTable::default()),
        }
    }
}

/// Parse a single-byte field delimiter. Accepts `tab` and `\t` for tabs.
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "tab" | "\\t" | "\t" => return Ok(b'\t'),
        _ => {}
    }
    match raw.as_bytes() {
        [byte] if byte.is_ascii() && !byte.is_ascii_alphanumeric() => Ok(*byte),
        _ => anyhow::bail!(
            "delimiter must be a single ASCII punctuation or whitespace character, got '{raw}'"
        ),
    }
}

/// Parse the top-word count; zero is rejected.
pub fn parse_top_words(raw: &str) -> Result<usize> {
    let n: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("'{raw}' is not a whole number"))?;
    if n == 0 {
        anyhow::bail!("top word count must be at least 1");
    }
    Ok(n)
}
