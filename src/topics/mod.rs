// Topic classification: the validated topic table and keyword matching.

pub mod matcher;
pub mod table;

pub use matcher::{match_topics, matched_topic_indices};
pub use table::{Topic, TopicTable};
