//! Configuration types for the analysis pipeline.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`AnalysisConfig`] - Window sizes, thresholds and list lengths
//! - [`StopWords`] - Word-cloud stop words for one chat
//!
//! # Example
//!
//! ```rust
//! use chatpulse::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::new()
//!     .with_rolling_window(10)
//!     .with_skip_system_messages(true);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::{ChatpulseError, Result};

/// Messages averaged by the trailing sentiment mean.
pub const DEFAULT_ROLLING_WINDOW: usize = 20;

/// Messages inspected for a negativity cluster.
pub const DEFAULT_CLUSTER_WINDOW: usize = 5;

/// Negative messages inside the window that make a cluster.
pub const DEFAULT_CLUSTER_MIN_COUNT: usize = 3;

/// Polarity below which a message counts as negative for clustering.
pub const DEFAULT_NEGATIVE_THRESHOLD: f64 = -0.3;

/// Entries kept per sentiment-shift direction.
pub const DEFAULT_SHIFT_TOP_N: usize = 3;

/// Minimum absolute change of the rolling mean reported as a shift.
pub const DEFAULT_SHIFT_THRESHOLD: f64 = 0.1;

/// Silence after which the next sender starts a new conversation.
pub const DEFAULT_STARTER_GAP_HOURS: i64 = 4;

/// Emoji entries kept in the report.
pub const DEFAULT_EMOJI_TOP_N: usize = 15;

/// Word-cloud entries kept in the report.
pub const DEFAULT_WORD_CLOUD_TOP_N: usize = 50;

/// Shortest token (in characters) admitted to the word cloud.
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

/// Messages kept per direction in the sentiment highlights.
pub const DEFAULT_HIGHLIGHT_TOP_N: usize = 5;

/// Polarity band around zero counted as neutral in the sentiment summary.
pub const DEFAULT_NEUTRAL_BAND: f64 = 0.05;

/// Configuration for a single analysis run.
///
/// Every field has a default matching the published report semantics;
/// only change them when you know you want a different report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Trailing window of the sentiment moving average (default: 20)
    pub rolling_window: usize,

    /// Trailing window for negativity clusters (default: 5)
    pub cluster_window: usize,

    /// Negative messages needed inside the cluster window (default: 3)
    pub cluster_min_count: usize,

    /// Strict upper bound of "negative" polarity (default: -0.3)
    pub negative_threshold: f64,

    /// Entries per sentiment-shift direction (default: 3)
    pub shift_top_n: usize,

    /// Minimum absolute rolling-mean change for a shift (default: 0.1)
    pub shift_threshold: f64,

    /// Silence in hours that makes the next sender a starter (default: 4)
    pub starter_gap_hours: i64,

    /// Emoji entries kept (default: 15)
    pub emoji_top_n: usize,

    /// Word-cloud entries kept (default: 50)
    pub word_cloud_top_n: usize,

    /// Minimum word length in characters (default: 4)
    pub min_word_len: usize,

    /// Neutral polarity band for the sentiment summary (default: 0.05)
    pub neutral_band: f64,

    /// Highlighted messages per direction (default: 5)
    pub highlight_top_n: usize,

    /// Skip WhatsApp service notices while parsing (default: false)
    pub skip_system_messages: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            rolling_window: DEFAULT_ROLLING_WINDOW,
            cluster_window: DEFAULT_CLUSTER_WINDOW,
            cluster_min_count: DEFAULT_CLUSTER_MIN_COUNT,
            negative_threshold: DEFAULT_NEGATIVE_THRESHOLD,
            shift_top_n: DEFAULT_SHIFT_TOP_N,
            shift_threshold: DEFAULT_SHIFT_THRESHOLD,
            starter_gap_hours: DEFAULT_STARTER_GAP_HOURS,
            emoji_top_n: DEFAULT_EMOJI_TOP_N,
            word_cloud_top_n: DEFAULT_WORD_CLOUD_TOP_N,
            min_word_len: DEFAULT_MIN_WORD_LEN,
            neutral_band: DEFAULT_NEUTRAL_BAND,
            highlight_top_n: DEFAULT_HIGHLIGHT_TOP_N,
            skip_system_messages: false,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the moving-average window.
    #[must_use]
    pub fn with_rolling_window(mut self, window: usize) -> Self {
        self.rolling_window = window;
        self
    }

    /// Sets the negativity-cluster window.
    #[must_use]
    pub fn with_cluster_window(mut self, window: usize) -> Self {
        self.cluster_window = window;
        self
    }

    /// Sets how many negative messages make a cluster.
    #[must_use]
    pub fn with_cluster_min_count(mut self, count: usize) -> Self {
        self.cluster_min_count = count;
        self
    }

    /// Sets the polarity below which a message counts as negative.
    #[must_use]
    pub fn with_negative_threshold(mut self, threshold: f64) -> Self {
        self.negative_threshold = threshold;
        self
    }

    /// Sets the number of shifts kept per direction.
    #[must_use]
    pub fn with_shift_top_n(mut self, n: usize) -> Self {
        self.shift_top_n = n;
        self
    }

    /// Sets the minimum rolling-mean change reported as a shift.
    #[must_use]
    pub fn with_shift_threshold(mut self, threshold: f64) -> Self {
        self.shift_threshold = threshold;
        self
    }

    /// Sets the silence that marks a new conversation.
    #[must_use]
    pub fn with_starter_gap_hours(mut self, hours: i64) -> Self {
        self.starter_gap_hours = hours;
        self
    }

    /// Sets the number of emoji kept.
    #[must_use]
    pub fn with_emoji_top_n(mut self, n: usize) -> Self {
        self.emoji_top_n = n;
        self
    }

    /// Sets the number of word-cloud entries kept.
    #[must_use]
    pub fn with_word_cloud_top_n(mut self, n: usize) -> Self {
        self.word_cloud_top_n = n;
        self
    }

    /// Sets the minimum word length for the word cloud.
    #[must_use]
    pub fn with_min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = len;
        self
    }

    /// Sets the polarity band around zero counted as neutral.
    #[must_use]
    pub fn with_neutral_band(mut self, band: f64) -> Self {
        self.neutral_band = band;
        self
    }

    /// Sets the number of highlighted messages per direction.
    #[must_use]
    pub fn with_highlight_top_n(mut self, n: usize) -> Self {
        self.highlight_top_n = n;
        self
    }

    /// Sets whether service notices are skipped while parsing.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }

    /// Returns the starter gap as a duration.
    ///
    /// Fails when the hour count does not fit a [`TimeDelta`].
    pub fn starter_gap(&self) -> Result<TimeDelta> {
        TimeDelta::try_hours(self.starter_gap_hours).ok_or_else(|| {
            ChatpulseError::invalid_config(
                "starter_gap_hours",
                format!("{} hours is out of range", self.starter_gap_hours),
            )
        })
    }

    /// Checks that the configuration describes a computable report.
    pub fn validate(&self) -> Result<()> {
        if self.rolling_window == 0 {
            return Err(ChatpulseError::invalid_config(
                "rolling_window",
                "must be at least 1",
            ));
        }
        if self.cluster_window == 0 {
            return Err(ChatpulseError::invalid_config(
                "cluster_window",
                "must be at least 1",
            ));
        }
        if self.cluster_min_count > self.cluster_window {
            return Err(ChatpulseError::invalid_config(
                "cluster_min_count",
                format!(
                    "{} can never be reached inside a window of {}",
                    self.cluster_min_count, self.cluster_window
                ),
            ));
        }
        if self.starter_gap_hours < 0 {
            return Err(ChatpulseError::invalid_config(
                "starter_gap_hours",
                "must not be negative",
            ));
        }
        self.starter_gap()?;
        if !self.negative_threshold.is_finite() {
            return Err(ChatpulseError::invalid_config(
                "negative_threshold",
                "must be a finite number",
            ));
        }
        if !self.shift_threshold.is_finite() || self.shift_threshold < 0.0 {
            return Err(ChatpulseError::invalid_config(
                "shift_threshold",
                "must be a finite, non-negative number",
            ));
        }
        if !self.neutral_band.is_finite() || self.neutral_band < 0.0 {
            return Err(ChatpulseError::invalid_config(
                "neutral_band",
                "must be a finite, non-negative number",
            ));
        }
        Ok(())
    }
}

/// English stop words excluded from every word cloud.
///
/// Includes the placeholders WhatsApp writes for attachments
/// ("image omitted", "<Media omitted>").
pub const BASE_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "s", "same", "she", "should",
    "so", "some", "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "there", "these", "they", "this", "those", "through", "to", "too", "under", "until",
    "up", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "you", "your", "yours", "yourself", "yourselves", "omitted", "image",
    "video", "audio", "sticker", "gif", "media",
];

static BASE_STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BASE_STOP_WORDS.iter().copied().collect());

/// Stop words for one chat: the shared base set plus participant names.
///
/// The base set is process-wide and never modified; participant tokens live
/// in the per-chat value.
///
/// ```rust
/// use chatpulse::config::StopWords;
///
/// let stop = StopWords::for_participants(["Mary Jane", "Bob"]);
/// assert!(stop.contains("the"));
/// assert!(stop.contains("mary"));
/// assert!(stop.contains("jane"));
/// assert!(!stop.contains("weather"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    participant_tokens: HashSet<String>,
}

impl StopWords {
    /// Returns a stop-word set holding only the base words.
    pub fn base() -> Self {
        Self::default()
    }

    /// Adds every lower-cased, whitespace-split token of each name.
    pub fn for_participants<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let participant_tokens = names
            .into_iter()
            .flat_map(|name| {
                name.as_ref()
                    .to_lowercase()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { participant_tokens }
    }

    /// Returns `true` if `token` (already lower-case) is a stop word.
    pub fn contains(&self, token: &str) -> bool {
        BASE_STOP_WORD_SET.contains(token) || self.participant_tokens.contains(token)
    }
}
