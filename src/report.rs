//! The analysis report and its JSON shape.
//!
//! # Format
//! ```json
//! {
//!   "messages": [{"timestamp": "2024-01-01T10:00:00", "sender": "Alice", "message": "hi", ...}],
//!   "metadata": {"participants": ["Alice", "Bob"], "total_messages": 2, ...},
//!   "additional_metrics": {"activity": {...}, "emojis": [...], ...}
//! }
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::Message;
use crate::config::{AnalysisConfig, StopWords};
use crate::error::{ChatpulseError, Result};
use crate::message::iso_timestamp;
use crate::metrics::{
    Activity, DailySentiment, EmojiCount, NamedCount, ResponseTime, SentimentHighlights,
    SentimentSummary, Tally, WordCount, activity, average_response_times, conversation_starters,
    emoji_frequency, sentiment_by_day, sentiment_highlights, sentiment_summary, word_cloud,
};
use crate::sentiment::{EnrichedMessage, SentimentShiftSet, find_sentiment_shifts};

/// Everything produced by one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub messages: Vec<EnrichedMessage>,
    pub metadata: Metadata,
    pub additional_metrics: AdditionalMetrics,
}

/// Who took part and when.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    /// Distinct senders in order of first appearance
    pub participants: Vec<String>,
    pub total_messages: usize,
    /// Per-sender message counts, serialized as a JSON object
    #[serde(serialize_with = "ordered_counts")]
    pub messages_by_participant: Vec<(String, usize)>,
    #[serde(with = "iso_timestamp")]
    pub start_date: NaiveDateTime,
    #[serde(with = "iso_timestamp")]
    pub end_date: NaiveDateTime,
}

/// Output of the aggregate reducers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditionalMetrics {
    pub activity: Activity,
    pub emojis: Vec<EmojiCount>,
    pub starters: Vec<NamedCount>,
    pub word_cloud: Vec<WordCount>,
    pub avg_response_times: Vec<ResponseTime>,
    pub sentiment_shifts: SentimentShiftSet,
    pub sentiment_summary: SentimentSummary,
    pub sentiment_highlights: SentimentHighlights,
    pub sentiment_by_day: Vec<DailySentiment>,
}

fn ordered_counts<S: Serializer>(counts: &[(String, usize)], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(counts.len()))?;
    for (name, count) in counts {
        map.serialize_entry(name, count)?;
    }
    map.end()
}

impl Metadata {
    /// Summarizes who wrote what, and the covered time range.
    ///
    /// Fails on an empty timeline, which has no date range.
    pub fn from_messages(messages: &[Message]) -> Result<Self> {
        let (first, last) = match (messages.first(), messages.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(ChatpulseError::analysis("metadata", "timeline is empty")),
        };

        let by_sender: Tally<&str> = messages.iter().map(Message::sender).collect();
        let messages_by_participant: Vec<(String, usize)> = by_sender
            .into_entries()
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();

        Ok(Self {
            participants: messages_by_participant
                .iter()
                .map(|(name, _)| name.clone())
                .collect(),
            total_messages: messages.len(),
            messages_by_participant,
            start_date: first.timestamp,
            end_date: last.timestamp,
        })
    }
}

impl AdditionalMetrics {
    /// Runs every reducer over the enriched timeline.
    pub fn compute(
        messages: &[Message],
        enriched: &[EnrichedMessage],
        participants: &[String],
        config: &AnalysisConfig,
    ) -> Result<Self> {
        let stop_words = StopWords::for_participants(participants);
        Ok(Self {
            activity: activity(messages),
            emojis: emoji_frequency(messages, config.emoji_top_n),
            starters: conversation_starters(messages, config.starter_gap()?),
            word_cloud: word_cloud(
                messages,
                &stop_words,
                config.min_word_len,
                config.word_cloud_top_n,
            ),
            avg_response_times: average_response_times(messages),
            sentiment_shifts: find_sentiment_shifts(
                enriched,
                config.shift_top_n,
                config.shift_threshold,
            ),
            sentiment_summary: sentiment_summary(enriched, config.neutral_band),
            sentiment_highlights: sentiment_highlights(
                enriched,
                config.neutral_band,
                config.highlight_top_n,
            ),
            sentiment_by_day: sentiment_by_day(enriched),
        })
    }
}

impl AnalysisReport {
    /// Composes the report from an enriched timeline.
    pub fn build(enriched: Vec<EnrichedMessage>, config: &AnalysisConfig) -> Result<Self> {
        let messages: Vec<Message> = enriched.iter().map(|e| e.message.clone()).collect();
        let metadata = Metadata::from_messages(&messages)?;
        let additional_metrics =
            AdditionalMetrics::compute(&messages, &enriched, &metadata.participants, config)?;

        Ok(Self {
            messages: enriched,
            metadata,
            additional_metrics,
        })
    }

    /// Serializes the report as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the report as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the report to `path`.
    ///
    /// The JSON is rendered in memory first, so a serialization failure
    /// never leaves a truncated file behind.
    pub fn write_json(&self, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
