// Message normalization: lowercase, split on Unicode word boundaries, drop
// stop words, punctuation and anything that is not purely alphanumeric.
//
// Segmentation is adjusted to the usual English treebank conventions:
// hyphenated runs ("cloud-based") stay one unit, and trailing clitics
// ("project's", "don't") come off as units of their own.

use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::StopWords;
use super::traits::TokenNormalizer;
use crate::dataset::Message;

/// The default normalizer. Owns the process-wide stop-word set.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stop_words: StopWords,
}

impl Normalizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Normalize a plain string.
    ///
    /// Units come out in source order. A unit survives only if it is not a
    /// stop word, not punctuation, and entirely alphanumeric.
    pub fn normalize_text(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        segment(&lowered)
            .into_iter()
            .flat_map(|unit| {
                let (stem, clitic) = split_clitic(unit);
                std::iter::once(stem).chain(clitic)
            })
            .filter(|unit| self.is_retained(unit))
            .map(String::from)
            .collect()
    }

    fn is_retained(&self, unit: &str) -> bool {
        !unit.is_empty()
            && !self.stop_words.contains(unit)
            && !is_punctuation(unit)
            && unit.chars().all(char::is_alphanumeric)
    }
}

impl TokenNormalizer for Normalizer {
    fn normalize(&self, message: &Message) -> Vec<String> {
        match message {
            Message::Text(text) => self.normalize_text(text),
            Message::Number(_) | Message::Missing => Vec::new(),
        }
    }
}

/// Word-boundary units, with `word-word` runs joined back into one unit.
fn segment(text: &str) -> Vec<&str> {
    let units: Vec<(usize, &str)> = text.split_word_bound_indices().collect();
    let mut out = Vec::with_capacity(units.len());

    let mut i = 0;
    while i < units.len() {
        let (start, unit) = units[i];
        let mut end = start + unit.len();
        i += 1;
        if is_word(unit) {
            while i + 1 < units.len() && units[i].1 == "-" && is_word(units[i + 1].1) {
                let (next_start, next) = units[i + 1];
                end = next_start + next.len();
                i += 2;
            }
        }
        out.push(&text[start..end]);
    }
    out
}

fn is_word(unit: &str) -> bool {
    unit.chars().next().is_some_and(char::is_alphanumeric)
}

/// Clitics split off after an apostrophe, straight or curly.
const CLITICS: &[&str] = &["s", "m", "d", "ll", "re", "ve"];

/// Split a trailing clitic off a lowercased unit: "project's" becomes
/// ("project", "'s") and "don't" becomes ("do", "n't").
fn split_clitic(unit: &str) -> (&str, Option<&str>) {
    let Some(apostrophe) = unit.rfind(['\'', '\u{2019}']) else {
        return (unit, None);
    };
    let width = unit[apostrophe..].chars().next().map_or(0, char::len_utf8);
    let rest = &unit[apostrophe + width..];

    let cut = if CLITICS.contains(&rest) {
        apostrophe
    } else if rest == "t" && unit[..apostrophe].ends_with('n') {
        apostrophe - 1
    } else {
        return (unit, None);
    };

    if cut == 0 {
        (unit, None)
    } else {
        (&unit[..cut], Some(&unit[cut..]))
    }
}

/// True when every character is ASCII punctuation (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`).
fn is_punctuation(unit: &str) -> bool {
    unit.chars().all(|c| c.is_ascii_punctuation())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(StopWords::from_words(["i", "the", "is", "a"]))
    }

    #[test]
    fn test_basic_sentence() {
        let tokens = normalizer().normalize_text("I love project planning");
        assert_eq!(tokens, vec!["love", "project", "planning"]);
    }

    #[test]
    fn test_punctuation_dropped() {
        let tokens = normalizer().normalize_text("hello team, thanks!");
        assert_eq!(tokens, vec!["hello", "team", "thanks"]);
    }

    #[test]
    fn test_non_alphanumeric_units_dropped() {
        // "3.5" stays a single unit and fails the alphanumeric check
        let tokens = normalizer().normalize_text("Version 3.5 ships");
        assert_eq!(tokens, vec!["version", "ships"]);
    }

    #[test]
    fn test_split_clitic() {
        assert_eq!(split_clitic("project's"), ("project", Some("'s")));
        assert_eq!(split_clitic("team\u{2019}ll"), ("team", Some("\u{2019}ll")));
        assert_eq!(split_clitic("don't"), ("do", Some("n't")));
        assert_eq!(split_clitic("can't"), ("ca", Some("n't")));
        assert_eq!(split_clitic("o'clock"), ("o'clock", None));
        assert_eq!(split_clitic("'s"), ("'s", None));
        assert_eq!(split_clitic("n't"), ("n't", None));
        assert_eq!(split_clitic("cloud"), ("cloud", None));
    }

    #[test]
    fn test_hyphenated_runs_stay_together() {
        assert_eq!(segment("cloud-based tool"), vec!["cloud-based", " ", "tool"]);
        assert_eq!(segment("state-of-the-art"), vec!["state-of-the-art"]);
        assert_eq!(segment("well - known"), vec!["well", " ", "-", " ", "known"]);
        assert_eq!(segment("a--b"), vec!["a", "-", "-", "b"]);
    }

    #[test]
    fn test_contractions_keep_their_stem() {
        let tokens = normalizer().normalize_text("We don't ship the project's code");
        assert_eq!(tokens, vec!["we", "do", "ship", "project", "code"]);
    }

    #[test]
    fn test_non_text_messages_have_no_tokens() {
        let n = normalizer();
        assert!(n.normalize(&Message::from(42)).is_empty());
        assert!(n.normalize(&Message::Missing).is_empty());
    }

    #[test]
    fn test_punctuation_set() {
        assert!(is_punctuation("!"));
        assert!(is_punctuation("..."));
        assert!(!is_punctuation("a!"));
    }
}
