//! # Chatstats
//!
//! A Rust library for turning exported chat transcripts into a statistical
//! summary: who talks most, who apologizes, who answers slowest, when the chat
//! is busiest, which words and emoji dominate, and who restarts the
//! conversation after a long silence.
//!
//! ## Overview
//!
//! Transcripts are plain text, one message per line:
//!
//! ```text
//! 12.05.2024, 22:15 - Alice: See you tomorrow
//! 12.05.2024, 22:17 - Bob: sleep well ❤️
//! ```
//!
//! Lines that don't match (continuations of multi-line messages, system
//! notices) are skipped. Every matched line is visited once, in order, by a
//! single aggregation pass that feeds all counters at the same time.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let report = analyze(
//!         "01.01.23, 09:00 - Alice: hello there friend\n\
//!          01.01.23, 09:05 - Bob: özür dilerim, kusura bakma\n\
//!          01.01.23, 13:10 - Alice: ok no problem ❤️",
//!     )?;
//!
//!     assert_eq!(report.total_messages, 3);
//!     assert_eq!(report.most_active.user.as_deref(), Some("Alice"));
//!     assert_eq!(report.most_apology.user.as_deref(), Some("Bob"));
//!     assert_eq!(report.conversation_starters.get("Alice"), Some(&1));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`analyzer`] - [`Analyzer`], [`analyze`], [`analyze_path`]
//! - [`parser`] - transcript line grammar ([`parse_line`](parser::parse_line))
//! - [`extract`] - word/emoji tokens and [`KeywordMatcher`](extract::KeywordMatcher)
//! - [`buckets`] - hour/weekday/date/month bucketing
//! - [`tracker`] - response latency and conversation-starter detection
//! - [`aggregator`] - the single-pass [`Aggregator`](aggregator::Aggregator)
//! - [`report`] - [`AnalysisReport`] and its finalizer
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig), [`Locale`](config::Locale)
//! - [`format`] / [`output`] - JSON, CSV and text report writers
//! - [`error`] - [`ChatstatsError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod aggregator;
pub mod analyzer;
pub mod buckets;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod message;
pub mod output;
pub mod parser;
pub mod report;
pub mod tally;
pub mod tracker;

// Re-export the main types at the crate root for convenience
pub use analyzer::{Analyzer, analyze, analyze_path};
pub use error::{ChatstatsError, Result};
pub use message::ParsedMessage;
pub use report::AnalysisReport;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ParsedMessage;

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Analysis
    pub use crate::analyzer::{Analyzer, analyze, analyze_path};
    pub use crate::config::{AnalysisConfig, KeywordConfig, Locale};
    pub use crate::extract::KeywordCategory;

    // Report
    pub use crate::report::{AnalysisReport, Histogram, LeaderboardEntry, SlowestResponder};

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_report};
}
