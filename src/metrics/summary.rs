//! Overall mood, highlight messages and the per-day sentiment timeline.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::sentiment::EnrichedMessage;

/// Overall sentiment distribution of a chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive_percent: f64,
    pub negative_percent: f64,
    pub neutral_percent: f64,
    /// Mean polarity mapped onto 0-100, where 50 is neutral
    pub mood_score: f64,
}

/// The strongest messages on each side of the neutral band.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentHighlights {
    /// Most positive first
    pub positive: Vec<EnrichedMessage>,
    /// Most negative first
    pub negative: Vec<EnrichedMessage>,
}

/// Mean sentiment for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySentiment {
    /// `YYYY-MM-DD`
    pub date: String,
    pub messages: usize,
    pub avg_polarity: f64,
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Buckets messages into positive, negative and neutral.
///
/// A message is positive above `band`, negative below `-band`, neutral
/// otherwise. An empty slice yields zero counts and a neutral mood of 50.
pub fn sentiment_summary(messages: &[EnrichedMessage], band: f64) -> SentimentSummary {
    let total = messages.len();
    let (mut positive, mut negative, mut sum) = (0, 0, 0.0);

    for msg in messages {
        let p = msg.sentiment_polarity;
        if p > band {
            positive += 1;
        } else if p < -band {
            negative += 1;
        }
        sum += p;
    }
    let neutral = total - positive - negative;
    let mean = if total == 0 { 0.0 } else { sum / total as f64 };

    SentimentSummary {
        positive,
        negative,
        neutral,
        positive_percent: percent(positive, total),
        negative_percent: percent(negative, total),
        neutral_percent: percent(neutral, total),
        mood_score: (mean + 1.0) / 2.0 * 100.0,
    }
}

/// Picks the `top_n` most positive messages above `band` and the `top_n`
/// most negative below `-band`.
///
/// Equal polarities keep timeline order.
pub fn sentiment_highlights(
    messages: &[EnrichedMessage],
    band: f64,
    top_n: usize,
) -> SentimentHighlights {
    let mut positive: Vec<&EnrichedMessage> = messages
        .iter()
        .filter(|m| m.sentiment_polarity > band)
        .collect();
    positive.sort_by(|a, b| b.sentiment_polarity.total_cmp(&a.sentiment_polarity));

    let mut negative: Vec<&EnrichedMessage> = messages
        .iter()
        .filter(|m| m.sentiment_polarity < -band)
        .collect();
    negative.sort_by(|a, b| a.sentiment_polarity.total_cmp(&b.sentiment_polarity));

    SentimentHighlights {
        positive: positive.into_iter().take(top_n).cloned().collect(),
        negative: negative.into_iter().take(top_n).cloned().collect(),
    }
}

/// Groups messages by calendar date, ascending.
pub fn sentiment_by_day(messages: &[EnrichedMessage]) -> Vec<DailySentiment> {
    let mut days: BTreeMap<NaiveDate, (usize, f64)> = BTreeMap::new();
    for msg in messages {
        let entry = days.entry(msg.message.timestamp.date()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += msg.sentiment_polarity;
    }

    days.into_iter()
        .map(|(date, (count, sum))| DailySentiment {
            date: date.format("%Y-%m-%d").to_string(),
            messages: count,
            avg_polarity: sum / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;

    fn enriched(day: u32, polarity: f64) -> EnrichedMessage {
        let ts = NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        EnrichedMessage {
            message: Message::new(ts, "Alice", "x"),
            sentiment_polarity: polarity,
            rolling_avg_sentiment: polarity,
            is_negativity_cluster: false,
        }
    }

    #[test]
    fn test_buckets() {
        let msgs = [enriched(1, 0.5), enriched(1, -0.5), enriched(1, 0.0), enriched(1, 0.05)];
        let summary = sentiment_summary(&msgs, 0.05);
        assert_eq!((summary.positive, summary.negative, summary.neutral), (1, 1, 2));
        assert_eq!(summary.positive_percent, 25.0);
        assert_eq!(summary.neutral_percent, 50.0);
    }

    #[test]
    fn test_mood_score() {
        let summary = sentiment_summary(&[enriched(1, 1.0), enriched(1, 0.0)], 0.05);
        assert!((summary.mood_score - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary_is_neutral() {
        let summary = sentiment_summary(&[], 0.05);
        assert_eq!(summary.positive + summary.negative + summary.neutral, 0);
        assert_eq!(summary.mood_score, 50.0);
        assert_eq!(summary.positive_percent, 0.0);
    }

    #[test]
    fn test_highlights() {
        let msgs = [
            enriched(1, 0.3),
            enriched(1, -0.8),
            enriched(2, 0.9),
            enriched(2, 0.02),
            enriched(3, -0.1),
            enriched(3, 0.3),
        ];
        let highlights = sentiment_highlights(&msgs, 0.05, 2);

        let positive: Vec<_> = highlights.positive.iter().map(|m| m.sentiment_polarity).collect();
        assert_eq!(positive, vec![0.9, 0.3]);
        assert_eq!(highlights.positive[1].message.timestamp.format("%d").to_string(), "01");

        let negative: Vec<_> = highlights.negative.iter().map(|m| m.sentiment_polarity).collect();
        assert_eq!(negative, vec![-0.8, -0.1]);
    }

    #[test]
    fn test_highlights_skip_neutral() {
        let msgs = [enriched(1, 0.05), enriched(1, -0.05), enriched(1, 0.0)];
        let highlights = sentiment_highlights(&msgs, 0.05, 5);
        assert!(highlights.positive.is_empty());
        assert!(highlights.negative.is_empty());
    }

    #[test]
    fn test_by_day_sorted_and_averaged() {
        let msgs = [enriched(5, 0.4), enriched(2, -0.2), enriched(5, 0.0)];
        let days = sentiment_by_day(&msgs);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2024-03-02");
        assert_eq!(days[0].messages, 1);
        assert_eq!(days[1].date, "2024-03-05");
        assert_eq!(days[1].messages, 2);
        assert!((days[1].avg_polarity - 0.2).abs() < 1e-9);
    }
}
