//! Configuration types for analysis.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`Locale`] - weekday/month naming tables, stoplist and default triggers
//! - [`KeywordConfig`] - trigger patterns of each [`KeywordCategory`]
//! - [`AnalysisConfig`] - everything an [`Analyzer`](crate::Analyzer) needs
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{AnalysisConfig, Locale};
//!
//! let config = AnalysisConfig::new()
//!     .with_locale(Locale::English)
//!     .with_starter_threshold_secs(2 * 60 * 60)
//!     .with_top_words(25);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatsError, Result};
use crate::extract::{KeywordCategory, WordFilter};

/// Default inactivity gap after which a message starts a new conversation (3 hours).
pub const DEFAULT_STARTER_THRESHOLD_SECS: i64 = 10_800;

// ============================================================================
// Locale
// ============================================================================

const TR_WEEKDAYS: [&str; 7] = [
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
    "Pazar",
];

const TR_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

const EN_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Naming tables and word lists of a transcript language.
///
/// Every locale has exactly 7 weekday names (Monday first) and 12 month names
/// (January first); only the strings differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Turkish names and triggers
    #[default]
    #[serde(alias = "tr")]
    Turkish,

    /// English names and triggers
    #[serde(alias = "en")]
    English,
}

impl Locale {
    /// Weekday names, index 0 = Monday.
    pub fn weekday_names(&self) -> &'static [&'static str; 7] {
        match self {
            Locale::Turkish => &TR_WEEKDAYS,
            Locale::English => &EN_WEEKDAYS,
        }
    }

    /// Month names, index 0 = January.
    pub fn month_names(&self) -> &'static [&'static str; 12] {
        match self {
            Locale::Turkish => &TR_MONTHS,
            Locale::English => &EN_MONTHS,
        }
    }

    /// Acknowledgement words left out of the vocabulary histogram.
    pub fn stopwords(&self) -> &'static [&'static str] {
        match self {
            Locale::Turkish => &["evet", "hayır", "tamam"],
            Locale::English => &["yes", "okay", "yeah"],
        }
    }

    /// Short code used on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Turkish => "tr",
            Locale::English => "en",
        }
    }

    /// Returns all supported locale names (including aliases).
    pub fn all_names() -> &'static [&'static str] {
        &["turkish", "tr", "english", "en"]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Turkish => write!(f, "Turkish"),
            Locale::English => write!(f, "English"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "turkish" | "tr" => Ok(Locale::Turkish),
            "english" | "en" => Ok(Locale::English),
            _ => Err(format!(
                "Unknown locale: '{}'. Expected one of: {}",
                s,
                Locale::all_names().join(", ")
            )),
        }
    }
}

// ============================================================================
// Keyword triggers
// ============================================================================

/// Trigger patterns for each [`KeywordCategory`].
///
/// Each entry is a regular-expression fragment. Fragments are matched
/// case-insensitively anywhere in the body; use `\b` to require word
/// boundaries.
///
/// # Example
///
/// ```rust
/// use chatstats::config::KeywordConfig;
/// use chatstats::extract::KeywordCategory;
///
/// let config = KeywordConfig::new(
///     vec![r"\bsorry\b".to_string()],
///     vec![r"\blove\b".to_string(), "<3".to_string()],
/// );
/// assert_eq!(config.triggers(KeywordCategory::Affection).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Apology triggers
    pub apology: Vec<String>,

    /// Affection triggers
    pub affection: Vec<String>,
}

impl KeywordConfig {
    /// Creates a configuration from explicit trigger lists.
    pub fn new(apology: Vec<String>, affection: Vec<String>) -> Self {
        Self { apology, affection }
    }

    /// Returns the built-in triggers of a locale.
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Turkish => Self {
                apology: owned(&[r"\bözür\b", "pardon", "affet", "kusura bakma"]),
                affection: owned(&[
                    r"\bseni seviyorum\b",
                    r"\bcanım\b",
                    r"\başkım\b",
                    r"\bkalp\b",
                    "<3",
                    r"\blove\b",
                    r"❤\x{FE0F}?",
                    "😘",
                    "😍",
                ]),
            },
            Locale::English => Self {
                apology: owned(&[
                    r"\bsorry\b",
                    r"\bapologi[sz]e\b",
                    r"\bmy bad\b",
                    r"\bforgive me\b",
                    r"\bpardon\b",
                ]),
                affection: owned(&[
                    r"\blove you\b",
                    r"\bdarling\b",
                    r"\bsweetheart\b",
                    r"\bhoney\b",
                    "<3",
                    r"❤\x{FE0F}?",
                    "😘",
                    "😍",
                ]),
            },
        }
    }

    /// Returns the triggers of one category.
    pub fn triggers(&self, category: KeywordCategory) -> &[String] {
        match category {
            KeywordCategory::Apology => &self.apology,
            KeywordCategory::Affection => &self.affection,
        }
    }
}

fn owned(triggers: &[&str]) -> Vec<String> {
    triggers.iter().map(|t| (*t).to_string()).collect()
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

// ============================================================================
// Analysis
// ============================================================================

/// Configuration for a transcript analysis.
///
/// All fields have defaults, so a JSON configuration file only needs the
/// values it changes:
///
/// ```json
/// { "locale": "en", "top_words": 25 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Naming tables, stoplist and default triggers (default: Turkish)
    pub locale: Locale,

    /// Silence after which the next message starts a conversation (default: 10800s)
    pub starter_threshold_secs: i64,

    /// Words must be longer than this many characters to be counted (default: 3)
    pub min_word_len: usize,

    /// Size of the most-common-words table (default: 15)
    pub top_words: usize,

    /// Size of the most-active-days table (default: 10)
    pub top_days: usize,

    /// Size of the emoji table (default: 10)
    pub top_emojis: usize,

    /// Keyword triggers; `None` uses the locale's built-in triggers
    pub keywords: Option<KeywordConfig>,

    /// Stopwords added to the locale's list
    pub extra_stopwords: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            starter_threshold_secs: DEFAULT_STARTER_THRESHOLD_SECS,
            min_word_len: 3,
            top_words: 15,
            top_days: 10,
            top_emojis: 10,
            keywords: None,
            extra_stopwords: Vec::new(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the conversation-starter threshold in seconds.
    #[must_use]
    pub fn with_starter_threshold_secs(mut self, secs: i64) -> Self {
        self.starter_threshold_secs = secs;
        self
    }

    /// Sets the minimum word length (exclusive).
    #[must_use]
    pub fn with_min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = len;
        self
    }

    /// Sets the size of the most-common-words table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the size of the most-active-days table.
    #[must_use]
    pub fn with_top_days(mut self, n: usize) -> Self {
        self.top_days = n;
        self
    }

    /// Sets the size of the emoji table.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Replaces the locale's built-in keyword triggers.
    #[must_use]
    pub fn with_keywords(mut self, keywords: KeywordConfig) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Adds a stopword.
    #[must_use]
    pub fn with_stopword(mut self, word: impl Into<String>) -> Self {
        self.extra_stopwords.push(word.into());
        self
    }

    /// Returns the effective keyword triggers.
    pub fn keyword_config(&self) -> KeywordConfig {
        self.keywords
            .clone()
            .unwrap_or_else(|| KeywordConfig::for_locale(self.locale))
    }

    /// Builds the word filter from the minimum length and both stoplists.
    pub fn word_filter(&self) -> WordFilter {
        let mut stopwords: Vec<&str> = self.locale.stopwords().to_vec();
        stopwords.extend(self.extra_stopwords.iter().map(String::as_str));
        WordFilter::new(self.min_word_len, stopwords)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.starter_threshold_secs < 0 {
            return Err(ChatstatsError::invalid_config(format!(
                "starter_threshold_secs must not be negative (got {})",
                self.starter_threshold_secs
            )));
        }

        for (name, value) in [
            ("top_words", self.top_words),
            ("top_days", self.top_days),
            ("top_emojis", self.top_emojis),
        ] {
            if value == 0 {
                return Err(ChatstatsError::invalid_config(format!(
                    "{name} must be at least 1"
                )));
            }
        }

        Ok(())
    }

    /// Parses a configuration from JSON.
    #[cfg(feature = "json-output")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_default() {
        let config = AnalysisConfig::default();
        assert_eq!(config.locale, Locale::Turkish);
        assert_eq!(config.starter_threshold_secs, 10_800);
        assert_eq!(config.min_word_len, 3);
        assert_eq!(config.top_words, 15);
        assert_eq!(config.top_days, 10);
        assert_eq!(config.top_emojis, 10);
        assert!(config.keywords.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_analysis_config_builder() {
        let config = AnalysisConfig::new()
            .with_locale(Locale::English)
            .with_starter_threshold_secs(60)
            .with_min_word_len(2)
            .with_top_words(5)
            .with_top_days(3)
            .with_top_emojis(1)
            .with_stopword("lol");

        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.starter_threshold_secs, 60);
        assert_eq!(config.min_word_len, 2);
        assert_eq!(config.top_words, 5);
        assert_eq!(config.top_days, 3);
        assert_eq!(config.top_emojis, 1);
        assert_eq!(config.extra_stopwords, ["lol"]);
    }

    #[test]
    fn test_validate_rejects_zero_top_n() {
        let err = AnalysisConfig::new().with_top_days(0).validate().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("top_days"));
    }

    #[test]
    fn test_validate_rejects_negative_threshold() {
        let err = AnalysisConfig::new()
            .with_starter_threshold_secs(-1)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("starter_threshold_secs"));
    }

    #[test]
    fn test_keyword_config_falls_back_to_locale() {
        let config = AnalysisConfig::new().with_locale(Locale::English);
        assert_eq!(
            config.keyword_config(),
            KeywordConfig::for_locale(Locale::English)
        );

        let custom = KeywordConfig::new(vec!["oops".into()], vec!["xoxo".into()]);
        let config = config.with_keywords(custom.clone());
        assert_eq!(config.keyword_config(), custom);
    }

    #[test]
    fn test_word_filter_merges_stoplists() {
        let filter = AnalysisConfig::new().with_stopword("Şimdi").word_filter();
        assert!(!filter.accepts("tamam"));
        assert!(!filter.accepts("şimdi"));
        assert!(filter.accepts("yarın"));
        assert!(!filter.accepts("ama"));
    }

    #[test]
    fn test_locale_tables() {
        for locale in [Locale::Turkish, Locale::English] {
            assert_eq!(locale.weekday_names().len(), 7);
            assert_eq!(locale.month_names().len(), 12);
            assert_eq!(locale.stopwords().len(), 3);
        }
        assert_eq!(Locale::Turkish.weekday_names()[0], "Pazartesi");
        assert_eq!(Locale::English.month_names()[11], "December");
    }

    #[test]
    fn test_turkish_apology_triggers() {
        let keywords = KeywordConfig::for_locale(Locale::Turkish);
        assert_eq!(
            keywords.triggers(KeywordCategory::Apology),
            [r"\bözür\b", "pardon", "affet", "kusura bakma"]
        );
    }

    #[test]
    fn test_locale_code_round_trips() {
        for locale in [Locale::Turkish, Locale::English] {
            assert_eq!(locale.code().parse::<Locale>().unwrap(), locale);
        }
        assert_eq!(Locale::English.code(), "en");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("tr".parse::<Locale>().unwrap(), Locale::Turkish);
        assert_eq!("English".parse::<Locale>().unwrap(), Locale::English);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    #[cfg(feature = "json-output")]
    fn test_from_json_partial() {
        let config = AnalysisConfig::from_json_str(r#"{"locale": "en", "top_words": 25}"#).unwrap();
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.top_words, 25);
        assert_eq!(config.top_days, 10);
    }

    #[test]
    #[cfg(feature = "json-output")]
    fn test_from_json_with_keywords() {
        let json = r#"{"keywords": {"apology": ["oops"], "affection": ["xoxo"]}}"#;
        let config = AnalysisConfig::from_json_str(json).unwrap();
        assert_eq!(
            config.keyword_config().triggers(KeywordCategory::Apology),
            ["oops"]
        );
    }

    #[test]
    #[cfg(feature = "json-output")]
    fn test_from_json_invalid_values() {
        assert!(AnalysisConfig::from_json_str(r#"{"top_emojis": 0}"#).is_err());
        assert!(AnalysisConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = AnalysisConfig::new().with_locale(Locale::English).with_top_words(7);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
