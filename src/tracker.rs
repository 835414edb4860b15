//! Order-dependent trackers.
//!
//! Both trackers carry a single slot of state from the previous message, so
//! they must see messages in transcript order, exactly once each.
//!
//! - [`ResponseLatencyTracker`] - how long each author takes to answer someone else
//! - [`ConversationStarterDetector`] - who breaks a long silence

use chrono::NaiveDateTime;

use crate::ParsedMessage;
use crate::tally::{FirstSeenMap, Tally};

/// Records reply gaps, attributed to the author who replies.
///
/// A gap is recorded only when the author changes. Out-of-order timestamps
/// produce negative gaps; they are kept as is.
///
/// # Example
///
/// ```rust
/// use chatstats::parser::parse_line;
/// use chatstats::tracker::ResponseLatencyTracker;
///
/// let mut tracker = ResponseLatencyTracker::new();
/// for line in [
///     "01.01.23, 09:00 - Alice: hi",
///     "01.01.23, 09:01 - Alice: are you there?",
///     "01.01.23, 09:05 - Bob: yes",
/// ] {
///     tracker.observe(&parse_line(line).unwrap());
/// }
///
/// assert_eq!(tracker.mean_latencies(), [("Bob".to_string(), 240.0)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResponseLatencyTracker {
    previous: Option<(String, NaiveDateTime)>,
    series: FirstSeenMap<Vec<i64>>,
}

impl ResponseLatencyTracker {
    /// Creates a tracker with no previous message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next message. Returns the gap recorded for it, if any.
    pub fn observe(&mut self, msg: &ParsedMessage) -> Option<i64> {
        let gap = match &self.previous {
            Some((author, at)) if *author != msg.author => {
                let gap = msg.seconds_since(*at);
                self.series.entry_mut(&msg.author).push(gap);
                Some(gap)
            }
            _ => None,
        };

        self.previous = Some((msg.author.clone(), msg.timestamp));
        gap
    }

    /// Gap sequences per author, in order of each author's first reply.
    pub fn series(&self) -> &FirstSeenMap<Vec<i64>> {
        &self.series
    }

    /// Mean gap in seconds per author. Authors who never replied are absent.
    pub fn mean_latencies(&self) -> Vec<(String, f64)> {
        self.series
            .iter()
            .filter(|(_, gaps)| !gaps.is_empty())
            .map(|(author, gaps)| {
                let sum: i64 = gaps.iter().sum();
                (author.to_owned(), sum as f64 / gaps.len() as f64)
            })
            .collect()
    }
}

/// Counts, per author, the messages that follow a silence longer than a threshold.
///
/// The silence is measured from the immediately preceding message, whoever
/// wrote it. The first message of a transcript is never a starter.
#[derive(Debug, Clone)]
pub struct ConversationStarterDetector {
    threshold_secs: i64,
    previous: Option<NaiveDateTime>,
    starters: Tally,
}

impl ConversationStarterDetector {
    /// Creates a detector; a gap must be strictly greater than `threshold_secs`.
    pub fn new(threshold_secs: i64) -> Self {
        Self {
            threshold_secs,
            previous: None,
            starters: Tally::new(),
        }
    }

    /// Feeds the next message. Returns `true` if it starts a conversation.
    pub fn observe(&mut self, msg: &ParsedMessage) -> bool {
        let starts = self
            .previous
            .is_some_and(|at| msg.seconds_since(at) > self.threshold_secs);

        if starts {
            self.starters.increment(&msg.author);
        }

        self.previous = Some(msg.timestamp);
        starts
    }

    /// Starter counts per author.
    pub fn starters(&self) -> &Tally {
        &self.starters
    }
}
