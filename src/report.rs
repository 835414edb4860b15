//! The analysis report and its finalizer.
//!
//! [`ReportFinalizer`] turns the raw counters of an
//! [`Aggregator`](crate::aggregator::Aggregator) into an [`AnalysisReport`]:
//!
//! - **Leaderboards** pick the highest entry; ties go to whoever appeared first
//! - **Top-N tables** (words, emoji, days) rank by count with a stable sort and truncate
//! - **Fixed tables** (hours, weekdays, months) always list every label, zero-filled
//!
//! # Serialization
//!
//! The report serializes with serde. Tables become JSON objects whose key
//! order is the table order:
//!
//! ```json
//! {
//!   "total_messages": 3,
//!   "most_active": { "user": "Alice", "count": 2 },
//!   "slowest": { "user": "Bob", "avg_seconds": 300.0 },
//!   "hourly_activity": { "00:00": 0, "01:00": 0, "...": 0 },
//!   "common_words": { "hello": 1, "there": 1, "friend": 1 }
//! }
//! ```

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::aggregator::Accumulated;
use crate::buckets::hour_labels;
use crate::config::{AnalysisConfig, Locale};
use crate::tally::Tally;

/// An ordered table of `label -> value`, serialized as a JSON object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Histogram<V = u64> {
    entries: Vec<(String, V)>,
}

impl<V> Histogram<V> {
    /// Creates a table from entries, keeping their order.
    pub fn from_entries(entries: Vec<(String, V)>) -> Self {
        Self { entries }
    }

    /// Value of `label`, if present.
    pub fn get(&self, label: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == label).map(|(_, v)| v)
    }

    /// Iterates over entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[(String, V)] {
        &self.entries
    }
}

impl Histogram<u64> {
    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }
}

impl From<&Tally> for Histogram<u64> {
    fn from(tally: &Tally) -> Self {
        Self::from_entries(tally.iter().map(|(k, &v)| (k.to_owned(), v)).collect())
    }
}

impl<V: Serialize> Serialize for Histogram<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// The author with the highest count of some metric.
///
/// `user` is `None` when nobody scored at all.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LeaderboardEntry {
    /// Winning author
    pub user: Option<String>,
    /// Winning count, `0` when `user` is `None`
    pub count: u64,
}

impl LeaderboardEntry {
    fn from_tally(tally: &Tally) -> Self {
        tally
            .leader()
            .map(|(user, count)| Self {
                user: Some(user.to_owned()),
                count,
            })
            .unwrap_or_default()
    }
}

/// The author with the highest mean reply gap.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SlowestResponder {
    /// Slowest author, `None` when no reply was ever observed
    pub user: Option<String>,
    /// Mean reply gap in seconds, `0.0` when `user` is `None`
    pub avg_seconds: f64,
}

impl SlowestResponder {
    fn from_means(means: &[(String, f64)]) -> Self {
        let mut slowest: Option<&(String, f64)> = None;
        for entry in means {
            if slowest.is_none_or(|best| entry.1 > best.1) {
                slowest = Some(entry);
            }
        }
        slowest
            .map(|(user, avg)| Self {
                user: Some(user.clone()),
                avg_seconds: *avg,
            })
            .unwrap_or_default()
    }
}

/// Statistical summary of one transcript.
///
/// Built once at the end of a pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Number of message lines
    pub total_messages: u64,
    /// Author with the most messages
    pub most_active: LeaderboardEntry,
    /// Author with the most apologetic messages
    pub most_apology: LeaderboardEntry,
    /// Author with the most affectionate messages
    pub most_love: LeaderboardEntry,
    /// Author with the highest mean reply gap
    pub slowest: SlowestResponder,
    /// Messages per author, first-seen order
    pub user_msg_count: Histogram,
    /// Apologetic messages per author, first-seen order
    pub user_apology_count: Histogram,
    /// Affectionate messages per author, first-seen order
    pub user_love_count: Histogram,
    /// Mean reply gap in seconds per author, order of first reply
    pub avg_response: Histogram<f64>,
    /// Messages per hour, `"00:00"` through `"23:00"`
    pub hourly_activity: Histogram,
    /// Messages per weekday, Monday first
    pub weekday_activity: Histogram,
    /// Messages per month, January first
    pub month_activity: Histogram,
    /// Busiest `DD.MM.YYYY` dates
    pub top_active_days: Histogram,
    /// Most frequent words
    pub common_words: Histogram,
    /// Most frequent emoji runs
    pub emoji_counts: Histogram,
    /// Conversation starts per author, first-seen order
    pub conversation_starters: Histogram,
}

impl AnalysisReport {
    /// Returns `true` if no message line was found.
    pub fn is_empty(&self) -> bool {
        self.total_messages == 0
    }

    /// Authors in order of their first message.
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.user_msg_count.labels()
    }
}

/// Reduces accumulated counters to the report shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFinalizer {
    locale: Locale,
    top_words: usize,
    top_days: usize,
    top_emojis: usize,
}

impl Default for ReportFinalizer {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl ReportFinalizer {
    /// Creates a finalizer with explicit table sizes.
    pub fn new(locale: Locale, top_words: usize, top_days: usize, top_emojis: usize) -> Self {
        Self {
            locale,
            top_words,
            top_days,
            top_emojis,
        }
    }

    /// Takes the locale and table sizes from `config`.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            config.locale,
            config.top_words,
            config.top_days,
            config.top_emojis,
        )
    }

    /// Builds the report.
    pub fn finalize(&self, acc: Accumulated) -> AnalysisReport {
        AnalysisReport {
            total_messages: acc.total_messages,
            most_active: LeaderboardEntry::from_tally(&acc.messages),
            most_apology: LeaderboardEntry::from_tally(&acc.apologies),
            most_love: LeaderboardEntry::from_tally(&acc.affection),
            slowest: SlowestResponder::from_means(&acc.mean_latencies),
            user_msg_count: Histogram::from(&acc.messages),
            user_apology_count: Histogram::from(&acc.apologies),
            user_love_count: Histogram::from(&acc.affection),
            avg_response: Histogram::from_entries(acc.mean_latencies),
            hourly_activity: fixed(hour_labels(), &acc.hours),
            weekday_activity: fixed(self.locale.weekday_names().iter(), &acc.weekdays),
            month_activity: fixed(self.locale.month_names().iter(), &acc.months),
            top_active_days: Histogram::from_entries(acc.dates.top(self.top_days)),
            common_words: Histogram::from_entries(acc.words.top(self.top_words)),
            emoji_counts: Histogram::from_entries(acc.emojis.top(self.top_emojis)),
            conversation_starters: Histogram::from(&acc.starters),
        }
    }
}

/// Pairs canonical labels with their counts.
fn fixed<L: ToString>(labels: impl Iterator<Item = L>, counts: &[u64]) -> Histogram {
    Histogram::from_entries(
        labels
            .zip(counts.iter().copied())
            .map(|(label, count)| (label.to_string(), count))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_accumulated() -> Accumulated {
        Accumulated {
            total_messages: 0,
            messages: Tally::new(),
            apologies: Tally::new(),
            affection: Tally::new(),
            hours: [0; 24],
            weekdays: [0; 7],
            months: [0; 12],
            dates: Tally::new(),
            words: Tally::new(),
            emojis: Tally::new(),
            mean_latencies: Vec::new(),
            starters: Tally::new(),
        }
    }

    #[test]
    fn test_empty_report() {
        let report = ReportFinalizer::default().finalize(empty_accumulated());

        assert!(report.is_empty());
        assert_eq!(report.most_active, LeaderboardEntry::default());
        assert_eq!(report.most_active.user, None);
        assert_eq!(report.most_apology.count, 0);
        assert_eq!(report.slowest.user, None);
        assert_eq!(report.slowest.avg_seconds, 0.0);
        assert_eq!(report.hourly_activity.len(), 24);
        assert_eq!(report.weekday_activity.len(), 7);
        assert_eq!(report.month_activity.len(), 12);
        assert_eq!(report.hourly_activity.total(), 0);
        assert!(report.top_active_days.is_empty());
        assert!(report.common_words.is_empty());
        assert!(report.emoji_counts.is_empty());
        assert!(report.avg_response.is_empty());
        assert!(report.conversation_starters.is_empty());
    }

    #[test]
    fn test_fixed_tables_use_locale_labels() {
        let mut acc = empty_accumulated();
        acc.weekdays[2] = 4;
        acc.months[7] = 9;
        let report = ReportFinalizer::new(Locale::English, 15, 10, 10).finalize(acc);

        assert_eq!(report.weekday_activity.get("Wednesday"), Some(&4));
        assert_eq!(report.weekday_activity.get("Monday"), Some(&0));
        assert_eq!(report.month_activity.get("August"), Some(&9));
        let labels: Vec<&str> = report.weekday_activity.labels().collect();
        assert_eq!(labels[0], "Monday");
        assert_eq!(labels[6], "Sunday");
    }

    #[test]
    fn test_top_n_truncation() {
        let mut acc = empty_accumulated();
        for i in 0..20 {
            for _ in 0..=i {
                acc.words.increment(&format!("word{i:02}"));
            }
        }
        let report = ReportFinalizer::default().finalize(acc);
        assert_eq!(report.common_words.len(), 15);
        assert_eq!(report.common_words.entries()[0], ("word19".to_string(), 20));
    }

    #[test]
    fn test_slowest_tie_goes_to_first() {
        let means = vec![("Bob".to_string(), 60.0), ("Alice".to_string(), 60.0)];
        let slowest = SlowestResponder::from_means(&means);
        assert_eq!(slowest.user.as_deref(), Some("Bob"));

        let means = vec![("Bob".to_string(), 60.0), ("Alice".to_string(), 61.0)];
        let slowest = SlowestResponder::from_means(&means);
        assert_eq!(slowest.user.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_histogram_serializes_in_order() {
        let h = Histogram::from_entries(vec![
            ("zeta".to_string(), 1u64),
            ("alpha".to_string(), 2),
        ]);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn test_empty_leaderboard_serializes_null() {
        let json = serde_json::to_string(&LeaderboardEntry::default()).unwrap();
        assert_eq!(json, r#"{"user":null,"count":0}"#);
    }
}
