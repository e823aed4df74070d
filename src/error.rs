// Error taxonomy for the analysis pipeline.
//
// Each stage owns one error type so the binary can report which boundary
// failed. The library never panics on bad input; everything surfaces here.

use std::path::PathBuf;

use thiserror::Error;

/// The dataset could not be turned into a list of messages.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("The CSV file is empty: {0}")]
    Empty(String),

    #[error("Message column '{column}' not found (available columns: {})", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("An error occurred while loading the data: {0}")]
    Read(#[from] csv::Error),
}

/// A fault during normalization or aggregation.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{counter} counter overflowed")]
    CounterOverflow { counter: &'static str },

    #[error("cannot merge tallies built over different topic tables")]
    TopicTableMismatch,
}

/// Language resources needed before any message can be normalized.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("could not read stop-word list {}: {source}", .path.display())]
    StopWordsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stop-word list '{0}' contains no words")]
    StopWordsEmpty(String),
}

/// The topic table failed validation.
#[derive(Debug, Error)]
pub enum TopicTableError {
    #[error("topic table has no topics")]
    NoTopics,

    #[error("topic #{0} has an empty name")]
    EmptyName(usize),

    #[error("topic '{0}' appears more than once")]
    DuplicateName(String),

    #[error("topic '{0}' has no keywords")]
    NoKeywords(String),

    #[error("topic '{0}' contains an empty keyword")]
    EmptyKeyword(String),

    #[error("could not read topic file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid topic file: {0}")]
    Invalid(#[from] serde_json::Error),
}
