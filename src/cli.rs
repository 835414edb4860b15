//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the argument structure of the `chatstats`
//! binary, and the rules that turn it into an [`AnalysisConfig`], an
//! [`OutputFormat`] and a log filter.
//!
//! ```rust
//! use chatstats::cli::Args;
//! use chatstats::config::Locale;
//! use chatstats::format::OutputFormat;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatstats", "chat.txt", "-o", "report.json", "--locale", "en"]);
//!
//! assert_eq!(args.output_format()?, OutputFormat::Json);
//! assert_eq!(args.analysis_config()?.locale, Locale::English);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{AnalysisConfig, Locale};
use crate::error::Result;
use crate::format::OutputFormat;

/// Summarize an exported chat transcript: activity, apologies, affection,
/// reply times, busiest hours and days, common words and emoji.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt -o report.json
    chatstats chat.txt -o authors.csv --locale en
    chatstats chat.txt -f json --top-words 30
    chatstats chat.txt --config stats.json -vv")]
pub struct Args {
    /// Path to the transcript
    pub input: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Report format [json, csv, text]; inferred from the output extension when omitted
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Language of keyword triggers, stopwords and weekday/month names [tr, en]
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// JSON file with analysis settings; flags take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Silence after which a message starts a new conversation
    #[arg(long, value_name = "SECONDS")]
    pub starter_threshold: Option<i64>,

    /// Number of common words to report
    #[arg(long, value_name = "N")]
    pub top_words: Option<usize>,

    /// Number of busiest days to report
    #[arg(long, value_name = "N")]
    pub top_days: Option<usize>,

    /// Number of emoji to report
    #[arg(long, value_name = "N")]
    pub top_emojis: Option<usize>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// No log output and no progress lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Builds the analysis configuration: the `--config` file (or defaults),
    /// then each flag that was given.
    ///
    /// # Errors
    ///
    /// Fails if the config file cannot be read or parsed.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => AnalysisConfig::default(),
        };

        if let Some(locale) = self.locale {
            config = config.with_locale(locale);
        }
        if let Some(secs) = self.starter_threshold {
            config = config.with_starter_threshold_secs(secs);
        }
        if let Some(n) = self.top_words {
            config = config.with_top_words(n);
        }
        if let Some(n) = self.top_days {
            config = config.with_top_days(n);
        }
        if let Some(n) = self.top_emojis {
            config = config.with_top_emojis(n);
        }

        Ok(config)
    }

    /// Resolves the report format: `--format`, else the output extension,
    /// else text.
    pub fn output_format(&self) -> Result<OutputFormat> {
        match (self.format, &self.output) {
            (Some(format), _) => Ok(format),
            (None, Some(path)) => OutputFormat::from_path(path),
            (None, None) => Ok(OutputFormat::Text),
        }
    }

    /// Default `tracing` filter directive for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "off";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(feature = "json-output")]
fn load_config(path: &std::path::Path) -> Result<AnalysisConfig> {
    AnalysisConfig::from_json_file(path)
}

#[cfg(not(feature = "json-output"))]
fn load_config(path: &std::path::Path) -> Result<AnalysisConfig> {
    Err(crate::error::ChatstatsError::invalid_config(format!(
        "cannot read {}: config files require the 'json-output' feature",
        path.display()
    )))
}
