// Output formatting: terminal display and machine-readable export.

pub mod json;
pub mod terminal;

/// How the analysis report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Shorten a message preview to `max_chars` characters, marking the cut
/// with "...". Counts chars, not bytes, so multi-byte text is safe.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
