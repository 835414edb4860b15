//! Token extractors: pure functions deriving signals from a message body.
//!
//! - [`extract_words`] - lower-cased word tokens, filtered by [`WordFilter`]
//! - [`extract_emojis`] - runs of adjacent emoji, one token per run
//! - [`KeywordMatcher`] - "did this body trigger category X" per [`KeywordCategory`]

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::KeywordConfig;
use crate::error::{ChatstatsError, Result};

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Maximal runs of emoji code points. `❤️` (heart plus variation selector) is one run.
static EMOJI_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F600}-\x{1F64F}",
        r"\x{1F300}-\x{1F5FF}",
        r"\x{1F680}-\x{1F6FF}",
        r"\x{1F700}-\x{1F77F}",
        r"\x{1F780}-\x{1F7FF}",
        r"\x{1F800}-\x{1F8FF}",
        r"\x{1F900}-\x{1F9FF}",
        r"\x{1FA00}-\x{1FA6F}",
        r"\x{1FA70}-\x{1FAFF}",
        r"\x{2702}-\x{27B0}",
        r"\x{24C2}-\x{1F251}",
        "]+",
    ))
    .expect("valid regex")
});

// ============================================================================
// Words
// ============================================================================

/// Which word tokens count towards the vocabulary histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFilter {
    min_len: usize,
    stopwords: HashSet<String>,
}

impl WordFilter {
    /// Keeps tokens longer than `min_len` characters that are not stopwords.
    ///
    /// Stopwords are compared after lower-casing.
    pub fn new<I, S>(min_len: usize, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            min_len,
            stopwords: stopwords
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Returns `true` if `token` (already lower-cased) should be counted.
    pub fn accepts(&self, token: &str) -> bool {
        token.chars().count() > self.min_len && !self.stopwords.contains(token)
    }
}

/// Extracts the countable word tokens of `body`, lower-cased, in order.
///
/// # Example
///
/// ```rust
/// use chatstats::extract::{WordFilter, extract_words};
///
/// let filter = WordFilter::new(3, ["tamam"]);
/// let words = extract_words("Tamam, yarın GÖRÜŞÜRÜZ ok", &filter);
/// assert_eq!(words, ["yarın", "görüşürüz"]);
/// ```
pub fn extract_words(body: &str, filter: &WordFilter) -> Vec<String> {
    let lowered = body.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| filter.accepts(token))
        .map(str::to_owned)
        .collect()
}

// ============================================================================
// Emoji
// ============================================================================

/// Extracts emoji runs from `body`. Adjacent emoji form a single token.
///
/// # Example
///
/// ```rust
/// use chatstats::extract::extract_emojis;
///
/// assert_eq!(extract_emojis("haha 😂😂 ok 🔥"), ["😂😂", "🔥"]);
/// assert!(extract_emojis("no emoji here").is_empty());
/// ```
pub fn extract_emojis(body: &str) -> Vec<&str> {
    EMOJI_RUN.find_iter(body).map(|m| m.as_str()).collect()
}

// ============================================================================
// Keyword categories
// ============================================================================

/// Sentiment categories tallied per author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    /// Apologies ("sorry", "özür dilerim", ...)
    Apology,
    /// Affection (terms of endearment, `<3`, heart emoji, ...)
    Affection,
}

impl KeywordCategory {
    /// Returns all categories.
    pub fn all() -> &'static [KeywordCategory] {
        &[KeywordCategory::Apology, KeywordCategory::Affection]
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordCategory::Apology => write!(f, "apology"),
            KeywordCategory::Affection => write!(f, "affection"),
        }
    }
}

/// One compiled, case-insensitive pattern per keyword category.
///
/// Built once from a [`KeywordConfig`]; matching is then read-only, so a
/// matcher can be shared between threads.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    patterns: Vec<(KeywordCategory, Regex)>,
}

impl KeywordMatcher {
    /// Compiles the triggers of every category.
    ///
    /// Each trigger is a regular-expression fragment; the fragments of a
    /// category are joined into one case-insensitive alternation.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::EmptyCategory`] if a category has no triggers
    /// and [`ChatstatsError::InvalidPattern`] if a trigger does not compile.
    pub fn compile(config: &KeywordConfig) -> Result<Self> {
        let mut patterns = Vec::with_capacity(KeywordCategory::all().len());

        for &category in KeywordCategory::all() {
            let triggers = config.triggers(category);
            if triggers.is_empty() {
                return Err(ChatstatsError::empty_category(category));
            }

            let alternation = triggers
                .iter()
                .map(|t| format!("(?:{t})"))
                .collect::<Vec<_>>()
                .join("|");
            let regex = Regex::new(&format!("(?i){alternation}"))
                .map_err(|e| ChatstatsError::invalid_pattern(category, e))?;

            patterns.push((category, regex));
        }

        Ok(Self { patterns })
    }

    /// Returns `true` if `body` triggers `category` at least once.
    pub fn matches(&self, category: KeywordCategory, body: &str) -> bool {
        self.patterns
            .iter()
            .any(|(c, regex)| *c == category && regex.is_match(body))
    }

    /// Returns every category `body` triggers, each at most once.
    pub fn matched_categories<'a>(
        &'a self,
        body: &'a str,
    ) -> impl Iterator<Item = KeywordCategory> + 'a {
        self.patterns
            .iter()
            .filter(move |(_, regex)| regex.is_match(body))
            .map(|(category, _)| *category)
    }
}
