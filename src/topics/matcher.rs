// Topic matching: topics touched by one message.
//
// A topic matches when any of its keywords is exactly one of the message's
// normalized tokens. Matching is a membership test, not a substring search,
// so a phrase keyword like "social media" never matches because no single
// token can contain a space.

use std::collections::HashSet;

use super::table::{Topic, TopicTable};

/// Indices (in table order) of the topics matched by `tokens`.
///
/// Each topic appears at most once no matter how many of its keywords hit;
/// scanning a topic stops at its first matching keyword.
pub fn matched_topic_indices<S: AsRef<str>>(tokens: &[S], table: &TopicTable) -> Vec<usize> {
    if tokens.is_empty() {
        return Vec::new();
    }
    let token_set: HashSet<&str> = tokens.iter().map(AsRef::as_ref).collect();

    table
        .topics()
        .iter()
        .enumerate()
        .filter(|(_, topic)| {
            topic
                .keywords
                .iter()
                .any(|keyword| token_set.contains(keyword.as_str()))
        })
        .map(|(i, _)| i)
        .collect()
}

/// The topics matched by `tokens`, in table order.
pub fn match_topics<'t, S: AsRef<str>>(tokens: &[S], table: &'t TopicTable) -> Vec<&'t Topic> {
    let topics = table.topics();
    matched_topic_indices(tokens, table)
        .into_iter()
        .map(|i| &topics[i])
        .collect()
}

/// Whether a keyword could ever equal a normalized token: non-empty,
/// lowercase and purely alphanumeric.
pub fn is_matchable(keyword: &str) -> bool {
    !keyword.is_empty()
        && keyword.chars().all(char::is_alphanumeric)
        && !keyword.chars().any(char::is_uppercase)
}
