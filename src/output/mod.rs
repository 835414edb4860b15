//! Report writers.
//!
//! - [`to_json`] / [`write_json`] - full report as pretty JSON - requires `json-output` feature
//! - [`to_csv`] / [`write_csv`] - per-author table, semicolon-delimited - requires
//!   `csv-output` feature
//! - [`to_text`] / [`write_text`] - human-readable summary
//!
//! # Choosing a Format
//!
//! | Format | Use Case |
//! |--------|----------|
//! | JSON | Dashboards, charts, further processing |
//! | CSV | Spreadsheets, one row per author |
//! | Text | Reading in a terminal |

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{format_duration, to_text, write_text};
