//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers all error
//! cases in the library.
//!
//! # What is (and is not) an error
//!
//! Data-quality problems inside a transcript are never errors: lines that do
//! not match the message grammar, or whose date fields do not form a real
//! calendar timestamp, are skipped and the pass continues. Errors come from
//! the edges only:
//!
//! - **Configuration** - an invalid keyword trigger or an empty category,
//!   raised when the [`Analyzer`](crate::Analyzer) is built
//! - **I/O** - the transcript file cannot be read, or a report cannot be written
//! - **Output** - serialization failures and unknown output formats

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::extract::KeywordCategory;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::AnalysisReport;
///
/// fn my_function() -> Result<AnalysisReport> {
///     chatstats::analyze("")
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript file is not valid UTF-8.
    #[error("Transcript is not valid UTF-8{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Utf8 {
        /// The file path, if available
        path: Option<PathBuf>,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A keyword trigger did not compile into a regular expression.
    #[error("Invalid {category} trigger pattern: {source}")]
    InvalidPattern {
        /// The category whose pattern failed
        category: KeywordCategory,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A keyword category has no triggers at all.
    #[error("Keyword category {category} has no triggers configured")]
    EmptyCategory {
        /// The category that is empty
        category: KeywordCategory,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// The requested output format is unknown or not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// JSON parsing/serialization error.
    ///
    /// This can occur when loading a JSON configuration or writing a JSON report.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            path: None,
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates an invalid pattern error for a keyword category.
    pub fn invalid_pattern(category: KeywordCategory, source: regex::Error) -> Self {
        ChatstatsError::InvalidPattern { category, source }
    }

    /// Creates an empty category error.
    pub fn empty_category(category: KeywordCategory) -> Self {
        ChatstatsError::EmptyCategory { category }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatstatsError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this error comes from keyword or analysis configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ChatstatsError::InvalidPattern { .. }
                | ChatstatsError::EmptyCategory { .. }
                | ChatstatsError::InvalidConfig { .. }
        )
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }
}
