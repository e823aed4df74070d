// Aggregation: one linear pass over the dataset.
//
// A Tally accumulates every statistic as messages stream past. All of its
// counters are plain sums, so two tallies over the same topic table can be
// merged; a run over a partitioned dataset is observe-per-partition followed
// by merge.

use std::collections::HashMap;

use tracing::{debug, info};

use super::report::{average, AnalysisReport, TopicCount, WordCount};
use crate::dataset::Message;
use crate::error::AnalysisError;
use crate::text::TokenNormalizer;
use crate::topics::{matched_topic_indices, TopicTable};

#[derive(Debug, Clone, Copy)]
struct WordStat {
    count: u64,
    /// Position of the word's first appearance, used to order ties
    first_seen: u64,
}

/// Running statistics for one aggregation pass.
#[derive(Debug, Clone)]
pub struct Tally<'t> {
    table: &'t TopicTable,
    messages: u64,
    tokens: u64,
    characters: u64,
    frequencies: HashMap<String, WordStat>,
    next_first_seen: u64,
    topic_counts: Vec<u64>,
}

impl<'t> Tally<'t> {
    pub fn new(table: &'t TopicTable) -> Self {
        Self {
            table,
            messages: 0,
            tokens: 0,
            characters: 0,
            frequencies: HashMap::new(),
            next_first_seen: 0,
            topic_counts: vec![0; table.len()],
        }
    }

    /// Fold one message into the tally.
    ///
    /// Characters are counted on the raw text, so stop words and punctuation
    /// contribute even though normalization drops them. Topics are matched
    /// against the tokens just produced; each matched topic gains exactly 1.
    pub fn observe<N>(&mut self, message: &Message, normalizer: &N) -> Result<(), AnalysisError>
    where
        N: TokenNormalizer + ?Sized,
    {
        let tokens = normalizer.normalize(message);

        bump(&mut self.messages, 1, "message")?;
        bump(&mut self.characters, message.char_len() as u64, "character")?;
        bump(&mut self.tokens, tokens.len() as u64, "token")?;

        for i in matched_topic_indices(tokens.as_slice(), self.table) {
            bump(&mut self.topic_counts[i], 1, "topic")?;
        }

        for token in tokens {
            self.record_word(token, 1)?;
        }
        Ok(())
    }

    /// Add another partial tally into this one.
    ///
    /// Words new to `self` are appended after its existing words, in the
    /// order `other` first saw them.
    pub fn merge(&mut self, other: Tally<'_>) -> Result<(), AnalysisError> {
        if self.table != other.table {
            return Err(AnalysisError::TopicTableMismatch);
        }

        bump(&mut self.messages, other.messages, "message")?;
        bump(&mut self.characters, other.characters, "character")?;
        bump(&mut self.tokens, other.tokens, "token")?;
        for (mine, theirs) in self.topic_counts.iter_mut().zip(other.topic_counts) {
            bump(mine, theirs, "topic")?;
        }

        let mut words: Vec<(String, WordStat)> = other.frequencies.into_iter().collect();
        words.sort_by_key(|(_, stat)| stat.first_seen);
        for (word, stat) in words {
            self.record_word(word, stat.count)?;
        }
        Ok(())
    }

    /// Close the pass and rank the words.
    pub fn finish(self, top_n: usize) -> AnalysisReport {
        let mut ranked: Vec<(String, WordStat)> = self.frequencies.into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });

        let top_words = ranked
            .into_iter()
            .take(top_n)
            .map(|(word, stat)| WordCount {
                word,
                count: stat.count,
            })
            .collect();

        let topic_counts = self
            .table
            .names()
            .zip(self.topic_counts)
            .map(|(topic, count)| TopicCount {
                topic: topic.to_string(),
                count,
            })
            .collect();

        AnalysisReport {
            total_messages: self.messages,
            total_tokens: self.tokens,
            average_words_per_message: average(self.tokens, self.messages),
            total_characters: self.characters,
            top_words,
            topic_counts,
        }
    }

    pub fn messages(&self) -> u64 {
        self.messages
    }

    pub fn tokens(&self) -> u64 {
        self.tokens
    }

    pub fn characters(&self) -> u64 {
        self.characters
    }

    /// Number of distinct words seen so far.
    pub fn vocabulary(&self) -> usize {
        self.frequencies.len()
    }

    fn record_word(&mut self, word: String, count: u64) -> Result<(), AnalysisError> {
        match self.frequencies.get_mut(&word) {
            Some(stat) => bump(&mut stat.count, count, "word"),
            None => {
                let first_seen = self.next_first_seen;
                self.next_first_seen += 1;
                self.frequencies.insert(word, WordStat { count, first_seen });
                Ok(())
            }
        }
    }
}

fn bump(counter: &mut u64, by: u64, name: &'static str) -> Result<(), AnalysisError> {
    *counter = counter
        .checked_add(by)
        .ok_or(AnalysisError::CounterOverflow { counter: name })?;
    Ok(())
}

/// Run the full single-pass analysis over `messages`.
pub fn aggregate<N>(
    messages: &[Message],
    normalizer: &N,
    table: &TopicTable,
    top_n: usize,
) -> Result<AnalysisReport, AnalysisError>
where
    N: TokenNormalizer + ?Sized,
{
    let mut tally = Tally::new(table);
    for message in messages {
        tally.observe(message, normalizer)?;
    }

    debug!(vocabulary = tally.vocabulary(), "Built word frequency table");
    info!(
        messages = tally.messages(),
        tokens = tally.tokens(),
        characters = tally.characters(),
        "Aggregated messages"
    );

    Ok(tally.finish(top_n))
}
