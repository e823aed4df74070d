// Stop-word provider.
//
// The stop-word set is built exactly once at startup and never mutated
// afterwards. The default list is NLTK's English corpus, bundled with the
// binary so a run never has to fetch language data. The `stop-words` crate's
// ISO list and plain word-list files are available as alternatives.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use stop_words::{get, LANGUAGE};
use tracing::info;

use crate::error::InitializationError;

/// NLTK's English stop-word corpus, one word per line.
const NLTK_ENGLISH: &str = include_str!("../../resources/stopwords/english.txt");

/// Where the stop-word set comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StopWordSource {
    /// Bundled NLTK English list
    #[default]
    Nltk,
    /// ISO English list shipped with the `stop-words` crate
    Iso,
    /// A text file with one word per line; `#` starts a comment line
    File(PathBuf),
}

impl FromStr for StopWordSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "" | "nltk" => Self::Nltk,
            "iso" => Self::Iso,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for StopWordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nltk => write!(f, "nltk"),
            Self::Iso => write!(f, "iso"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// An immutable, lowercase stop-word set.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build the set from its source, failing fast if the resource is
    /// unavailable or yields no words.
    pub fn load(source: &StopWordSource) -> Result<Self, InitializationError> {
        let words: HashSet<String> = match source {
            StopWordSource::Nltk => parse_word_list(NLTK_ENGLISH),
            StopWordSource::Iso => {
                let words: Vec<String> = get(LANGUAGE::English);
                words.iter().map(|w| w.trim().to_lowercase()).collect()
            }
            StopWordSource::File(path) => {
                let contents = std::fs::read_to_string(path).map_err(|source| {
                    InitializationError::StopWordsUnreadable {
                        path: path.clone(),
                        source,
                    }
                })?;
                parse_word_list(&contents)
            }
        };

        if words.is_empty() {
            return Err(InitializationError::StopWordsEmpty(source.to_string()));
        }

        info!(source = %source, words = words.len(), "Loaded stop words");
        Ok(Self { words })
    }

    /// Build a set from an explicit word list. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        // Tokens reaching here are usually lowercase already
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn parse_word_list(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}
