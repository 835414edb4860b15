//! Single-pass aggregation of parsed messages.
//!
//! An [`Aggregator`] is owned by exactly one analysis pass. It is fed every
//! [`ParsedMessage`] once, in transcript order, and updates all running
//! counters on each call. When the input is exhausted,
//! [`finish`](Aggregator::finish) hands the counters to a
//! [`ReportFinalizer`].
//!
//! ```text
//! ParsedMessage ─┬─> author tally
//!                ├─> KeywordMatcher ──> apology / affection tallies
//!                ├─> TimeBuckets ─────> hour / weekday / month / date histograms
//!                ├─> ResponseLatencyTracker
//!                ├─> ConversationStarterDetector
//!                └─> extract_words / extract_emojis ──> vocabulary / emoji tallies
//! ```

use crate::ParsedMessage;
use crate::buckets::TimeBuckets;
use crate::extract::{KeywordCategory, KeywordMatcher, WordFilter, extract_emojis, extract_words};
use crate::report::{AnalysisReport, ReportFinalizer};
use crate::tally::Tally;
use crate::tracker::{ConversationStarterDetector, ResponseLatencyTracker};

/// Running state of one analysis pass.
#[derive(Debug)]
pub struct Aggregator<'a> {
    matcher: &'a KeywordMatcher,
    word_filter: &'a WordFilter,

    total_messages: u64,
    messages: Tally,
    apologies: Tally,
    affection: Tally,

    hours: [u64; 24],
    weekdays: [u64; 7],
    months: [u64; 12],
    dates: Tally,

    words: Tally,
    emojis: Tally,

    latency: ResponseLatencyTracker,
    starters: ConversationStarterDetector,
}

/// Everything an [`Aggregator`] accumulated, ready for finalization.
#[derive(Debug, Clone)]
pub struct Accumulated {
    /// Number of messages fed
    pub total_messages: u64,
    /// Messages per author
    pub messages: Tally,
    /// Apology messages per author
    pub apologies: Tally,
    /// Affectionate messages per author
    pub affection: Tally,
    /// Messages per hour of day
    pub hours: [u64; 24],
    /// Messages per weekday, Monday first
    pub weekdays: [u64; 7],
    /// Messages per month, January first
    pub months: [u64; 12],
    /// Messages per `DD.MM.YYYY` date
    pub dates: Tally,
    /// Word occurrences
    pub words: Tally,
    /// Emoji-run occurrences
    pub emojis: Tally,
    /// Mean reply gap per author, in order of first reply
    pub mean_latencies: Vec<(String, f64)>,
    /// Conversation starts per author
    pub starters: Tally,
}

impl<'a> Aggregator<'a> {
    /// Creates an empty aggregator.
    pub fn new(
        matcher: &'a KeywordMatcher,
        word_filter: &'a WordFilter,
        starter_threshold_secs: i64,
    ) -> Self {
        Self {
            matcher,
            word_filter,
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
            latency: ResponseLatencyTracker::new(),
            starters: ConversationStarterDetector::new(starter_threshold_secs),
        }
    }

    /// Folds the next message into every counter.
    pub fn push(&mut self, msg: &ParsedMessage) {
        let author = msg.author();

        self.total_messages += 1;
        self.messages.increment(author);

        for category in self.matcher.matched_categories(msg.body()) {
            match category {
                KeywordCategory::Apology => self.apologies.increment(author),
                KeywordCategory::Affection => self.affection.increment(author),
            }
        }

        let buckets = TimeBuckets::of(msg.timestamp());
        self.hours[buckets.hour as usize] += 1;
        self.weekdays[buckets.weekday] += 1;
        self.months[buckets.month] += 1;
        self.dates.increment(&buckets.date);

        self.latency.observe(msg);
        self.starters.observe(msg);

        for word in extract_words(msg.body(), self.word_filter) {
            self.words.increment(&word);
        }
        for emoji in extract_emojis(msg.body()) {
            self.emojis.increment(emoji);
        }
    }

    /// Number of messages fed so far.
    pub fn total_messages(&self) -> u64 {
        self.total_messages
    }

    /// Ends the pass, returning the raw counters.
    pub fn into_accumulated(self) -> Accumulated {
        Accumulated {
            total_messages: self.total_messages,
            messages: self.messages,
            apologies: self.apologies,
            affection: self.affection,
            hours: self.hours,
            weekdays: self.weekdays,
            months: self.months,
            dates: self.dates,
            words: self.words,
            emojis: self.emojis,
            mean_latencies: self.latency.mean_latencies(),
            starters: self.starters.starters().clone(),
        }
    }

    /// Ends the pass and builds the report.
    pub fn finish(self, finalizer: &ReportFinalizer) -> AnalysisReport {
        finalizer.finalize(self.into_accumulated())
    }
}
