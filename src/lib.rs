// Parley: word and topic statistics for exported message datasets.
//
// This is the library root. Each module corresponds to one stage of the
// analysis pipeline: load → normalize → match topics → aggregate → report.

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod output;
pub mod text;
pub mod topics;

pub use analysis::{aggregate, AnalysisReport};
pub use dataset::{load_messages, Dataset, Message};
pub use text::{Normalizer, StopWords};
pub use topics::TopicTable;
