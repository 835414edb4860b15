//! Analysis entry point.
//!
//! An [`Analyzer`] compiles its configuration once (keyword patterns, word
//! filter, table sizes) and can then run any number of independent passes.
//! Each pass owns a fresh [`Aggregator`], so one analyzer can be shared
//! between threads.
//!
//! # Example
//!
//! ```rust
//! use chatstats::Analyzer;
//! use chatstats::config::{AnalysisConfig, Locale};
//!
//! let analyzer = Analyzer::with_config(AnalysisConfig::new().with_locale(Locale::English))?;
//!
//! let report = analyzer.analyze_str(
//!     "01.01.23, 09:00 - Alice: good morning\n\
//!      01.01.23, 09:02 - Bob: sorry, overslept",
//! );
//!
//! assert_eq!(report.total_messages, 2);
//! assert_eq!(report.most_apology.user.as_deref(), Some("Bob"));
//! assert_eq!(report.avg_response.get("Bob"), Some(&120.0));
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::fs;
use std::io::BufRead;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::aggregator::Aggregator;
use crate::config::AnalysisConfig;
use crate::error::{ChatstatsError, Result};
use crate::extract::{KeywordMatcher, WordFilter};
use crate::parser::parse_line;
use crate::report::{AnalysisReport, ReportFinalizer};

/// Compiled analysis configuration.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    matcher: KeywordMatcher,
    word_filter: WordFilter,
    finalizer: ReportFinalizer,
}

/// Line bookkeeping of one pass, for logging.
#[derive(Debug, Default)]
struct PassStats {
    lines: usize,
    skipped: usize,
    blank: usize,
}

impl Analyzer {
    /// Creates an analyzer with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(AnalysisConfig::default())
    }

    /// Validates `config` and compiles its keyword triggers.
    ///
    /// # Errors
    ///
    /// Fails on out-of-range values, an empty keyword category or a trigger
    /// that is not a valid regular expression.
    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let matcher = KeywordMatcher::compile(&config.keyword_config())?;
        let word_filter = config.word_filter();
        let finalizer = ReportFinalizer::from_config(&config);

        debug!(
            locale = %config.locale,
            starter_threshold_secs = config.starter_threshold_secs,
            "analyzer ready"
        );

        Ok(Self {
            config,
            matcher,
            word_filter,
            finalizer,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Starts a pass that the caller feeds message by message.
    pub fn aggregator(&self) -> Aggregator<'_> {
        Aggregator::new(
            &self.matcher,
            &self.word_filter,
            self.config.starter_threshold_secs,
        )
    }

    /// Returns the finalizer used to close passes.
    pub fn finalizer(&self) -> &ReportFinalizer {
        &self.finalizer
    }

    /// Analyzes a whole transcript held in memory.
    pub fn analyze_str(&self, text: &str) -> AnalysisReport {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        self.analyze_lines(text.lines())
    }

    /// Analyzes transcript lines in the given order.
    pub fn analyze_lines<'l>(&self, lines: impl IntoIterator<Item = &'l str>) -> AnalysisReport {
        let mut agg = self.aggregator();
        let mut stats = PassStats::default();
        for line in lines {
            feed(&mut agg, &mut stats, line);
        }
        self.close(agg, &stats)
    }

    /// Analyzes a transcript read line by line.
    ///
    /// # Errors
    ///
    /// Fails if reading fails or the input is not valid UTF-8.
    pub fn analyze_reader<R: BufRead>(&self, mut reader: R) -> Result<AnalysisReport> {
        let mut agg = self.aggregator();
        let mut stats = PassStats::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            let raw = String::from_utf8(std::mem::take(&mut buf))?;
            let line = if stats.lines == 0 {
                raw.strip_prefix('\u{feff}').unwrap_or(&raw)
            } else {
                &raw
            };
            feed(&mut agg, &mut stats, line);
            buf = raw.into_bytes();
        }
        Ok(self.close(agg, &stats))
    }

    /// Reads and analyzes a transcript file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid UTF-8.
    pub fn analyze_path(&self, path: impl AsRef<Path>) -> Result<AnalysisReport> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading transcript");

        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|source| ChatstatsError::Utf8 {
            path: Some(path.to_path_buf()),
            source,
        })?;

        Ok(self.analyze_str(&text))
    }

    fn close(&self, agg: Aggregator<'_>, stats: &PassStats) -> AnalysisReport {
        let messages = agg.total_messages();
        debug!(
            lines = stats.lines,
            messages,
            skipped = stats.skipped,
            "analysis pass complete"
        );
        if messages == 0 && stats.lines > stats.blank {
            warn!(
                lines = stats.lines,
                "no line matched the message format; is this a chat export?"
            );
        }
        agg.finish(&self.finalizer)
    }
}

fn feed(agg: &mut Aggregator<'_>, stats: &mut PassStats, line: &str) {
    stats.lines += 1;
    match parse_line(line) {
        Some(msg) => agg.push(&msg),
        None if line.trim().is_empty() => {
            stats.skipped += 1;
            stats.blank += 1;
        }
        None => {
            stats.skipped += 1;
            trace!(line = stats.lines, "skipping non-message line");
        }
    }
}

/// Analyzes a transcript with the default configuration.
///
/// # Example
///
/// ```rust
/// let report = chatstats::analyze("01.01.23, 09:00 - Alice: merhaba")?;
/// assert_eq!(report.most_active.user.as_deref(), Some("Alice"));
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
pub fn analyze(text: &str) -> Result<AnalysisReport> {
    Ok(Analyzer::new()?.analyze_str(text))
}

/// Analyzes a transcript file with the default configuration.
pub fn analyze_path(path: impl AsRef<Path>) -> Result<AnalysisReport> {
    Analyzer::new()?.analyze_path(path)
}
