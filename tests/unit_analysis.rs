// Unit tests for the aggregation pass.
//
// Exercises the documented scenarios and the invariants of the report:
// character totals, averages, per-message topic counting and ranking.

use parley::analysis::{aggregate, AnalysisReport, Tally};
use parley::dataset::Message;
use parley::text::{Normalizer, StopWordSource, StopWords, TokenNormalizer};
use parley::topics::TopicTable;

fn normalizer() -> Normalizer {
    Normalizer::new(StopWords::load(&StopWordSource::Nltk).unwrap())
}

fn run(messages: &[Message]) -> AnalysisReport {
    aggregate(messages, &normalizer(), &TopicTable::default(), 10).unwrap()
}

fn texts(items: &[&str]) -> Vec<Message> {
    items.iter().map(|s| Message::from(*s)).collect()
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn scenario_three_messages_default_topics() {
    let messages = texts(&[
        "I love project planning",
        "Marketing campaign launch",
        "hello team, thanks!",
    ]);
    let report = run(&messages);

    assert_eq!(report.total_messages, 3);
    assert_eq!(report.topic_count("Project Management"), Some(1));
    assert_eq!(report.topic_count("Marketing"), Some(1));
    assert_eq!(report.topic_count("General"), Some(1));
    assert_eq!(report.topic_count("Technology"), Some(0));

    // love project planning / marketing campaign launch / hello team thanks
    assert_eq!(report.total_tokens, 9);
    assert!((report.average_words_per_message - 3.0).abs() < 1e-9);
}

#[test]
fn scenario_non_text_cells() {
    let messages = vec![
        Message::from(42),
        Message::Missing,
        Message::from("Cloud AI software"),
    ];
    let n = normalizer();
    assert!(n.normalize(&messages[0]).is_empty());
    assert!(n.normalize(&messages[1]).is_empty());
    assert_eq!(n.normalize(&messages[2]), vec!["cloud", "ai", "software"]);

    let report = run(&messages);
    assert_eq!(report.total_messages, 3);
    assert_eq!(report.total_tokens, 3);
    assert_eq!(report.topic_count("Technology"), Some(1));
    // "42" + "nan" + "Cloud AI software"
    assert_eq!(report.total_characters, 2 + 3 + 17);
    for word in ["cloud", "ai", "software"] {
        assert_eq!(report.word_count(word), Some(1), "{word}");
    }
}

#[test]
fn scenario_empty_dataset() {
    let report = run(&[]);
    assert_eq!(report.total_messages, 0);
    assert_eq!(report.total_tokens, 0);
    assert_eq!(report.average_words_per_message, 0.0);
    assert_eq!(report.total_characters, 0);
    assert!(report.top_words.is_empty());
    assert_eq!(report.topic_counts.len(), 4);
    assert!(report.topic_counts.iter().all(|t| t.count == 0));
}

// ============================================================
// Invariants
// ============================================================

#[test]
fn character_total_counts_raw_text() {
    let messages = texts(&["The the THE!!!", "a, an, the.", "naïve café"]);
    let report = run(&messages);

    let expected: u64 = messages.iter().map(|m| m.as_text().chars().count() as u64).sum();
    assert_eq!(report.total_characters, expected);
    // First two normalize to nothing but still count
    assert_eq!(report.total_tokens, 2);
}

#[test]
fn average_is_tokens_over_messages() {
    let messages = texts(&["cloud software", "the", "launch launch launch"]);
    let report = run(&messages);
    assert_eq!(report.total_tokens, 5);
    assert!((report.average_words_per_message - 5.0 / 3.0).abs() < 1e-9);
}

#[test]
fn topic_counts_at_most_once_per_message() {
    let messages = texts(&[
        "project schedule deadline task planning agile scrum",
        "project project project",
        "nothing relevant here",
    ]);
    let report = run(&messages);
    assert_eq!(report.topic_count("Project Management"), Some(2));

    for message in &messages {
        let single = run(std::slice::from_ref(message));
        for count in &single.topic_counts {
            assert!(count.count <= 1, "{} counted {} times", count.topic, count.count);
        }
    }
}

#[test]
fn possessive_and_hyphenated_words_match_topics_by_stem() {
    let report = run(&texts(&["The project's scope", "A cloud-based tool"]));
    assert_eq!(report.topic_count("Project Management"), Some(1));
    assert_eq!(report.topic_count("Technology"), Some(0));
    assert_eq!(report.word_count("project"), Some(1));
    assert_eq!(report.word_count("cloud"), None);
}

#[test]
fn top_words_ranked_and_capped_at_ten() {
    let mut messages = texts(&["alpha alpha alpha beta beta gamma"]);
    messages.extend(texts(&[
        "one two three four five six seven eight nine ten eleven twelve",
    ]));
    let report = run(&messages);

    assert_eq!(report.top_words.len(), 10);
    assert_eq!(report.top_words[0].word, "alpha");
    assert_eq!(report.top_words[0].count, 3);
    assert_eq!(report.top_words[1].word, "beta");
    assert_eq!(report.top_words[1].count, 2);
    // The rest are ties at 1; only their counts are asserted
    assert!(report.top_words[2..].iter().all(|w| w.count == 1));

    let counts: Vec<u64> = report.top_words.iter().map(|w| w.count).collect();
    let mut sorted = counts.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(counts, sorted);
}

#[test]
fn partitioned_tallies_merge_to_the_same_report() {
    let table = TopicTable::default();
    let n = normalizer();
    let messages = texts(&[
        "Marketing campaign launch",
        "cloud software release",
        "hello team, thanks!",
        "project planning for the cloud migration",
        "campaign review meeting",
    ]);

    // Large enough that no tied word is cut off
    let whole = aggregate(&messages, &n, &table, 100).unwrap();

    let mut merged = Tally::new(&table);
    for chunk in messages.chunks(2) {
        let mut part = Tally::new(&table);
        for message in chunk {
            part.observe(message, &n).unwrap();
        }
        merged.merge(part).unwrap();
    }
    let merged = merged.finish(100);

    assert_eq!(merged.total_messages, whole.total_messages);
    assert_eq!(merged.total_tokens, whole.total_tokens);
    assert_eq!(merged.total_characters, whole.total_characters);
    assert_eq!(merged.topic_counts, whole.topic_counts);
    for entry in &whole.top_words {
        assert_eq!(merged.word_count(&entry.word), Some(entry.count), "{}", entry.word);
    }
}
