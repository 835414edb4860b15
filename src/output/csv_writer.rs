//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::error::{ChatstatsError, Result};
use crate::report::AnalysisReport;

const HEADER: [&str; 6] = [
    "Author",
    "Messages",
    "Apologies",
    "Affection",
    "AvgResponseSeconds",
    "ConversationStarts",
];

/// Writes the per-author table to a CSV file.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Author`, `Messages`, `Apologies`, `Affection`,
///   `AvgResponseSeconds`, `ConversationStarts`
/// - One row per author, in order of first message
/// - `AvgResponseSeconds` is empty for authors who never replied to someone else
pub fn write_csv(report: &AnalysisReport, output_path: &str) -> Result<()> {
    let content = to_csv(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Converts the per-author table to a CSV string.
pub fn to_csv(report: &AnalysisReport) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;

    for author in report.authors() {
        writer.write_record(build_record(report, author))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatstatsError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Build CSV record for one author.
fn build_record(report: &AnalysisReport, author: &str) -> [String; 6] {
    let count = |table: &crate::report::Histogram| table.get(author).copied().unwrap_or(0);

    [
        author.to_string(),
        count(&report.user_msg_count).to_string(),
        count(&report.user_apology_count).to_string(),
        count(&report.user_love_count).to_string(),
        report
            .avg_response
            .get(author)
            .map(|avg| format!("{avg:.1}"))
            .unwrap_or_default(),
        count(&report.conversation_starters).to_string(),
    ]
}
