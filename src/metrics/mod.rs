//! Aggregate reducers over the parsed timeline.
//!
//! Each reducer is a pure function over a message slice producing one slice
//! of `additional_metrics`:
//!
//! - [`activity`] - Messages per hour of day and per weekday
//! - [`emoji`] - Most frequent emoji
//! - [`response`] - Mean reply latency per sender
//! - [`starters`] - Who opens conversations after a long silence
//! - [`word_cloud`] - Most frequent meaningful words
//! - [`summary`] - Overall mood, highlights and per-day sentiment

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

pub mod activity;
pub mod emoji;
pub mod response;
pub mod starters;
pub mod summary;
pub mod word_cloud;

pub use activity::{Activity, DayCount, HourCount, activity};
pub use emoji::{EmojiCount, emoji_frequency, is_emoji};
pub use response::{ResponseTime, average_response_times};
pub use starters::conversation_starters;
pub use summary::{
    DailySentiment, SentimentHighlights, SentimentSummary, sentiment_by_day, sentiment_highlights,
    sentiment_summary,
};
pub use word_cloud::{WordCount, tokenize, word_cloud};

/// A sender name with a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedCount {
    /// Sender display name
    pub name: String,
    /// How many times it was counted
    pub count: usize,
}

/// Counter that remembers the order keys were first seen.
///
/// Ranking with [`most_common`](Tally::most_common) is stable, so keys with
/// equal counts keep first-seen order and output is reproducible.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Counts one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Returns the count for `key`.
    pub fn get(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&pos| self.entries[pos].1)
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Returns all entries in first-seen order.
    pub fn into_entries(self) -> Vec<(K, usize)> {
        self.entries
    }

    /// Returns the `n` highest counts, ties in first-seen order.
    pub fn most_common(self, n: usize) -> Vec<(K, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl<K: Eq + Hash + Clone> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
