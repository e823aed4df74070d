// Colored terminal output for analysis reports and topic tables.
//
// Rendering builds a String so the same text can be printed or inspected in
// tests; the display_* functions just print it.

use std::fmt::Write;

use colored::Colorize;

use crate::analysis::AnalysisReport;
use crate::topics::TopicTable;

/// Render the full analysis report.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "\n{}", "--- Message Analysis Results ---".bold());
    let _ = writeln!(out, "Total Messages: {}", report.total_messages);
    let _ = writeln!(
        out,
        "Average Words per Message: {:.2}",
        report.average_words_per_message
    );
    let _ = writeln!(out, "Total Characters: {}", report.total_characters);

    let _ = writeln!(out, "\n{}", "Most Frequent Words:".bold());
    for entry in &report.top_words {
        let _ = writeln!(out, "  {}: {}", entry.word, entry.count);
    }

    let _ = writeln!(out, "\n{}", "Topic Counts:".bold());
    for entry in &report.topic_counts {
        let count = if entry.count > 0 {
            entry.count.to_string().bright_green()
        } else {
            entry.count.to_string().dimmed()
        };
        let _ = writeln!(out, "  {}: {}", entry.topic, count);
    }

    out
}

/// Print the analysis report to stdout.
pub fn display_report(report: &AnalysisReport) {
    print!("{}", render_report(report));
}

/// Render the configured topic table, flagging keywords that cannot match.
pub fn render_topic_table(table: &TopicTable) -> String {
    let mut out = String::new();
    let unreachable = table.unreachable_keywords();

    let _ = writeln!(
        out,
        "\n{}",
        format!("=== Topic Table ({} topics) ===", table.len()).bold()
    );
    for (i, topic) in table.topics().iter().enumerate() {
        let keywords: Vec<String> = topic
            .keywords
            .iter()
            .map(|k| {
                if unreachable.contains(&(topic.name.as_str(), k.as_str())) {
                    format!("{}*", k).dimmed().to_string()
                } else {
                    k.clone()
                }
            })
            .collect();
        let _ = writeln!(out, "  {:>2}. {}", i + 1, topic.name.bold());
        let _ = writeln!(out, "      Keywords: {}", keywords.join(", "));
    }

    if !unreachable.is_empty() {
        let _ = writeln!(
            out,
            "\n  {} * never matches a single normalized token",
            "Note:".yellow()
        );
    }

    out
}

/// Print the topic table to stdout.
pub fn display_topic_table(table: &TopicTable) {
    print!("{}", render_topic_table(table));
}

/// Print a message preview followed by its normalized tokens.
pub fn display_tokens(text: &str, tokens: &[String]) {
    println!("{} {}", "Input:".bold(), super::truncate_chars(text, 120).dimmed());
    if tokens.is_empty() {
        println!("{} {}", "Tokens:".bold(), "(none retained)".dimmed());
    } else {
        println!("{} {}", "Tokens:".bold(), tokens.join(" "));
    }
    println!("{} {}", "Count:".bold(), tokens.len());
}
