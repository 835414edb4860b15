//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::Result;
use crate::report::AnalysisReport;

/// Writes the report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "total_messages": 3,
///   "most_active": { "user": "Alice", "count": 2 },
///   "user_msg_count": { "Alice": 2, "Bob": 1 }
/// }
/// ```
pub fn write_json(report: &AnalysisReport, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
pub fn to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
