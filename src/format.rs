//! Output format types for analysis reports.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::format::{OutputFormat, to_format_string};
//!
//! let report = chatstats::analyze("01.01.23, 09:00 - Alice: merhaba dünya")?;
//!
//! let json = to_format_string(&report, OutputFormat::Json)?;
//! assert!(json.contains("\"total_messages\": 1"));
//!
//! // Or detect the format from an output path
//! let format = OutputFormat::from_path("summary.csv")?;
//! assert_eq!(format, OutputFormat::Csv);
//! # Ok(())
//! # }
//! ```

use std::fs;

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatsError, Result};
use crate::report::AnalysisReport;

/// Output format for analysis reports.
///
/// - [`Json`](OutputFormat::Json) - the full report, pretty-printed
/// - [`Csv`](OutputFormat::Csv) - per-author table, semicolon-delimited
/// - [`Text`](OutputFormat::Text) - human-readable summary for the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Full report as a JSON object
    Json,

    /// One row per author
    Csv,

    /// Human-readable summary (default)
    #[default]
    Text,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use chatstats::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv", "text", "txt"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Csv, OutputFormat::Text]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Text => "text/plain",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "txt" | "text" => Ok(OutputFormat::Text),
            _ => Err(ChatstatsError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: json, csv, txt",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Text => write!(f, "Text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_report(report: &AnalysisReport, path: &str, format: OutputFormat) -> Result<()> {
    let content = to_format_string(report, format)?;
    fs::write(path, content)?;
    Ok(())
}

/// Converts a report to a string in the specified format.
pub fn to_format_string(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(report),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv(report),
        OutputFormat::Text => Ok(crate::output::to_text(report)),
        #[allow(unreachable_patterns)]
        _ => Err(ChatstatsError::invalid_format(
            "output",
            format!(
                "Output format {:?} requires the '{}' feature to be enabled",
                format,
                match format {
                    OutputFormat::Csv => "csv-output",
                    _ => "json-output",
                }
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("CSV").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("pdf").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
        assert_eq!(OutputFormat::Text.to_string(), "Text");
    }

    #[test]
    fn test_format_mime_type() {
        assert_eq!(OutputFormat::Json.mime_type(), "application/json");
        assert_eq!(OutputFormat::Csv.mime_type(), "text/csv");
        assert_eq!(OutputFormat::Text.mime_type(), "text/plain");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path("report.json").unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_path("/tmp/authors.CSV").unwrap(),
            OutputFormat::Csv
        );
        assert_eq!(
            OutputFormat::from_path("summary.txt").unwrap(),
            OutputFormat::Text
        );
        let err = OutputFormat::from_path("report.pdf").unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_format_default_and_all() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(OutputFormat::all().len(), 3);
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Csv).unwrap();
        assert_eq!(json, "\"csv\"");
        let parsed: OutputFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(parsed, OutputFormat::Text);
    }
}
