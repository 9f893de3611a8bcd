//! Detection of the sharpest moves in the sentiment moving average.

use serde::Serialize;

use crate::sentiment::annotator::EnrichedMessage;

/// The messages where the rolling sentiment rose and fell the most.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentShiftSet {
    /// Largest rises first
    pub positive: Vec<EnrichedMessage>,
    /// Largest drops first
    pub negative: Vec<EnrichedMessage>,
}

impl SentimentShiftSet {
    /// Returns `true` if no shift crossed the threshold.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// First difference of the rolling average, with `0.0` at index 0.
pub fn rolling_diffs(messages: &[EnrichedMessage]) -> Vec<f64> {
    std::iter::once(0.0)
        .chain(
            messages
                .windows(2)
                .map(|pair| pair[1].rolling_avg_sentiment - pair[0].rolling_avg_sentiment),
        )
        .take(messages.len())
        .collect()
}

/// Finds up to `top_n` rises above `threshold` and drops below `-threshold`.
///
/// Candidates are ranked with a stable sort, so equal changes keep input
/// order. Fewer than two messages yield an empty set.
pub fn find_sentiment_shifts(
    messages: &[EnrichedMessage],
    top_n: usize,
    threshold: f64,
) -> SentimentShiftSet {
    if messages.len() < 2 {
        return SentimentShiftSet::default();
    }

    let diffs = rolling_diffs(messages);
    let mut ranked: Vec<(usize, f64)> = diffs.into_iter().enumerate().collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    let positive = ranked
        .iter()
        .take(top_n)
        .filter(|(_, diff)| *diff > threshold)
        .map(|&(i, _)| messages[i].clone())
        .collect();

    ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
    let negative = ranked
        .iter()
        .take(top_n)
        .filter(|(_, diff)| *diff < -threshold)
        .map(|&(i, _)| messages[i].clone())
        .collect();

    SentimentShiftSet { positive, negative }
}
