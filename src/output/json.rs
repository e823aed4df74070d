// JSON export of the analysis report.

use anyhow::Result;

use crate::analysis::AnalysisReport;

/// Serialize the report as pretty-printed JSON.
pub fn render_report(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Print the report to stdout as JSON.
pub fn display_report(report: &AnalysisReport) -> Result<()> {
    println!("{}", render_report(report)?);
    Ok(())
}
