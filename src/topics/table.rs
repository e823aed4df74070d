// Topic table: the ordered topic → keyword configuration.
//
// Loaded once at startup and shared read-only by every message. Order
// matters: keywords are scanned in stored order and the report lists topics
// in table order, so the table is a Vec rather than a map.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::matcher::is_matchable;
use crate::error::TopicTableError;

/// A named topic and the keywords that signal it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Topic {
    pub fn new<S: Into<String>>(name: S, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// A validated, ordered list of topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopicTable {
    topics: Vec<Topic>,
}

impl TopicTable {
    /// Validate and wrap a topic list.
    ///
    /// Rejects an empty table, blank or duplicate topic names, and topics
    /// without keywords. Keywords that can never equal a normalized token
    /// (phrases, uppercase, punctuation) are accepted but logged.
    pub fn new(topics: Vec<Topic>) -> Result<Self, TopicTableError> {
        if topics.is_empty() {
            return Err(TopicTableError::NoTopics);
        }

        let mut seen = HashSet::new();
        for (i, topic) in topics.iter().enumerate() {
            if topic.name.trim().is_empty() {
                return Err(TopicTableError::EmptyName(i + 1));
            }
            if !seen.insert(topic.name.as_str()) {
                return Err(TopicTableError::DuplicateName(topic.name.clone()));
            }
            if topic.keywords.is_empty() {
                return Err(TopicTableError::NoKeywords(topic.name.clone()));
            }
            if topic.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(TopicTableError::EmptyKeyword(topic.name.clone()));
            }
        }

        let table = Self { topics };
        for (topic, keyword) in table.unreachable_keywords() {
            warn!(topic, keyword, "Keyword can never match a normalized token");
        }
        Ok(table)
    }

    /// Parse a JSON array of `{"name": ..., "keywords": [...]}` objects.
    pub fn from_json(json: &str) -> Result<Self, TopicTableError> {
        let topics: Vec<Topic> = serde_json::from_str(json)?;
        Self::new(topics)
    }

    /// Read and validate a JSON topic file.
    pub fn load(path: &Path) -> Result<Self, TopicTableError> {
        let json = std::fs::read_to_string(path).map_err(|source| TopicTableError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// (topic, keyword) pairs whose keyword can never be matched.
    pub fn unreachable_keywords(&self) -> Vec<(&str, &str)> {
        self.topics
            .iter()
            .flat_map(|t| {
                t.keywords
                    .iter()
                    .filter(|k| !is_matchable(k))
                    .map(move |k| (t.name.as_str(), k.as_str()))
            })
            .collect()
    }
}

impl Default for TopicTable {
    /// The built-in four-topic table.
    fn default() -> Self {
        Self {
            topics: vec![
                Topic::new(
                    "Project Management",
                    &["project", "schedule", "deadline", "task", "planning", "agile", "scrum"],
                ),
                Topic::new(
                    "Marketing",
                    &["marketing", "advertising", "brand", "campaign", "SEO", "social media"],
                ),
                Topic::new(
                    "Technology",
                    &["technology", "AI", "machine learning", "cloud", "data science", "software"],
                ),
                Topic::new(
                    "General",
                    &["hello", "thanks", "agree", "comment", "thoughts", "meeting"],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let default = TopicTable::default();
        let revalidated = TopicTable::new(default.topics().to_vec()).unwrap();
        assert_eq!(revalidated, default);
        assert_eq!(
            default.names().collect::<Vec<_>>(),
            vec!["Project Management", "Marketing", "Technology", "General"]
        );
    }

    #[test]
    fn test_default_unreachable_keywords() {
        let table = TopicTable::default();
        let unreachable = table.unreachable_keywords();
        assert!(unreachable.contains(&("Marketing", "social media")));
        assert!(unreachable.contains(&("Marketing", "SEO")));
        assert!(unreachable.contains(&("Technology", "AI")));
        assert!(unreachable.contains(&("Technology", "machine learning")));
        assert!(unreachable.contains(&("Technology", "data science")));
        assert_eq!(unreachable.len(), 5);
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = TopicTable::new(vec![Topic::new("A", &["x"]), Topic::new("A", &["y"])])
            .unwrap_err();
        assert!(matches!(err, TopicTableError::DuplicateName(name) if name == "A"));
    }

    #[test]
    fn test_rejects_blank_name_and_empty_keywords() {
        assert!(matches!(
            TopicTable::new(vec![Topic::new("  ", &["x"])]),
            Err(TopicTableError::EmptyName(1))
        ));
        assert!(matches!(
            TopicTable::new(vec![Topic::new("A", &[])]),
            Err(TopicTableError::NoKeywords(_))
        ));
        assert!(matches!(
            TopicTable::new(vec![Topic::new("A", &["ok", " "])]),
            Err(TopicTableError::EmptyKeyword(_))
        ));
        assert!(matches!(TopicTable::new(vec![]), Err(TopicTableError::NoTopics)));
    }

    #[test]
    fn test_json_preserves_order() {
        let json = r#"[
            {"name": "Zeta", "keywords": ["z"]},
            {"name": "Alpha", "keywords": ["a", "b"]}
        ]"#;
        let table = TopicTable::from_json(json).unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
        assert_eq!(table.topics()[1].keywords, vec!["a", "b"]);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            TopicTable::from_json("{\"not\": \"a list\"}"),
            Err(TopicTableError::Invalid(_))
        ));
    }
}
