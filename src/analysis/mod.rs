// Aggregation of per-message results into run-wide statistics.

pub mod aggregate;
pub mod report;

pub use aggregate::{aggregate, Tally};
pub use report::{AnalysisReport, TopicCount, WordCount, DEFAULT_TOP_WORDS};
