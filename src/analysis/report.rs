// AnalysisReport: the statistics bundle for one full run.

use serde::{Deserialize, Serialize};

/// Default length of the top-word list.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// A word and how often it was seen across the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// A topic and how many messages matched it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: u64,
}

/// Aggregate statistics over every message of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_messages: u64,
    /// Retained tokens across all messages
    pub total_tokens: u64,
    /// `total_tokens / total_messages`, or 0.0 for an empty dataset
    pub average_words_per_message: f64,
    /// Sum of raw message lengths before normalization
    pub total_characters: u64,
    /// Most frequent tokens, count descending. Ties keep first-seen order.
    pub top_words: Vec<WordCount>,
    /// One entry per configured topic, in topic table order
    pub topic_counts: Vec<TopicCount>,
}

impl AnalysisReport {
    /// Count for a topic by name, if the topic is configured.
    pub fn topic_count(&self, topic: &str) -> Option<u64> {
        self.topic_counts
            .iter()
            .find(|t| t.topic == topic)
            .map(|t| t.count)
    }

    /// Count for a word, if it made it into the top list.
    pub fn word_count(&self, word: &str) -> Option<u64> {
        self.top_words
            .iter()
            .find(|w| w.word == word)
            .map(|w| w.count)
    }
}

/// Mean tokens per message; defined as 0.0 when there are no messages.
pub fn average(tokens: u64, messages: u64) -> f64 {
    if messages == 0 {
        0.0
    } else {
        tokens as f64 / messages as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average(0, 0), 0.0);
        assert_eq!(average(7, 0), 0.0);
    }

    #[test]
    fn test_average() {
        assert!((average(7, 3) - 7.0 / 3.0).abs() < f64::EPSILON);
    }
}
