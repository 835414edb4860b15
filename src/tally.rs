//! Counting maps that remember the order in which keys first appeared.
//!
//! Every leaderboard and top-N table breaks ties by first appearance in the
//! transcript, so the maps behind them keep their keys in insertion order
//! and rank with a stable sort. Hash iteration order never reaches a report.

use std::collections::HashMap;

/// A string-keyed map whose iteration order is first-insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstSeenMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for FirstSeenMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> FirstSeenMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Returns the value of `key`, inserting `V::default()` at the end if absent.
    pub fn entry_mut(&mut self, key: &str) -> &mut V
    where
        V: Default,
    {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.entries.push((key.to_owned(), V::default()));
                self.index.insert(key.to_owned(), i);
                i
            }
        };
        &mut self.entries[i].1
    }

    /// Iterates over entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key was ever inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the map, returning entries in first-insertion order.
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

/// A histogram of string keys.
pub type Tally = FirstSeenMap<u64>;

impl FirstSeenMap<u64> {
    /// Adds one to `key`.
    pub fn increment(&mut self, key: &str) {
        *self.entry_mut(key) += 1;
    }

    /// Count of `key`, zero if never seen.
    pub fn count(&self, key: &str) -> u64 {
        self.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Entries by count descending; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` highest entries of [`ranked`](Self::ranked).
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Highest entry; the earliest-seen one on ties.
    pub fn leader(&self) -> Option<(&str, u64)> {
        let mut best: Option<(&str, u64)> = None;
        for (key, &count) in self.iter() {
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((key, count));
            }
        }
        best
    }
}
