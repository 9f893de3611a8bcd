//! Per-message sentiment and the trailing statistics derived from it.
//!
//! Both derived signals are causal: the value at index `i` only looks at
//! indices `max(0, i - window + 1) ..= i`.

use serde::Serialize;

use crate::Message;
use crate::config::AnalysisConfig;
use crate::sentiment::scorer::PolarityScorer;

/// A message together with its sentiment signals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedMessage {
    /// The parsed message
    #[serde(flatten)]
    pub message: Message,
    /// Polarity of this message alone, in `[-1, 1]`
    pub sentiment_polarity: f64,
    /// Trailing mean polarity
    pub rolling_avg_sentiment: f64,
    /// Whether the trailing window is dense with negative messages
    pub is_negativity_cluster: bool,
}

/// Trailing arithmetic mean over at most `window` values.
///
/// The window shrinks at the start, so the first value is always
/// `values[0]`. A `window` of 0 is treated as 1.
///
/// ```rust
/// use chatpulse::sentiment::rolling_mean;
///
/// assert_eq!(rolling_mean(&[1.0, 0.0, -1.0], 2), vec![1.0, 0.5, -0.5]);
/// ```
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let slice = &values[(i + 1).saturating_sub(window)..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Flags indices whose trailing `window` holds at least `min_count` values
/// strictly below `threshold`.
///
/// ```rust
/// use chatpulse::sentiment::negativity_clusters;
///
/// let flags = negativity_clusters(&[-0.5, -0.5, 0.0, -0.5], 5, -0.3, 3);
/// assert_eq!(flags, vec![false, false, false, true]);
/// ```
pub fn negativity_clusters(
    values: &[f64],
    window: usize,
    threshold: f64,
    min_count: usize,
) -> Vec<bool> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let negatives = values[(i + 1).saturating_sub(window)..=i]
                .iter()
                .filter(|&&v| v < threshold)
                .count();
            negatives >= min_count
        })
        .collect()
}

/// Scores every message and attaches the trailing statistics.
pub fn annotate(
    messages: Vec<Message>,
    scorer: &dyn PolarityScorer,
    config: &AnalysisConfig,
) -> Vec<EnrichedMessage> {
    let polarities: Vec<f64> = messages
        .iter()
        .map(|m| scorer.polarity(m.text()).clamp(-1.0, 1.0))
        .collect();
    annotate_with_polarities(messages, &polarities, config)
}

/// Attaches the trailing statistics to already scored messages.
///
/// `polarities` must have one entry per message.
pub fn annotate_with_polarities(
    messages: Vec<Message>,
    polarities: &[f64],
    config: &AnalysisConfig,
) -> Vec<EnrichedMessage> {
    debug_assert_eq!(messages.len(), polarities.len());

    let rolling = rolling_mean(polarities, config.rolling_window);
    let clusters = negativity_clusters(
        polarities,
        config.cluster_window,
        config.negative_threshold,
        config.cluster_min_count,
    );

    messages
        .into_iter()
        .zip(polarities)
        .zip(rolling.into_iter().zip(clusters))
        .map(|((message, &polarity), (rolling_avg, cluster))| EnrichedMessage {
            message,
            sentiment_polarity: polarity,
            rolling_avg_sentiment: rolling_avg,
            is_negativity_cluster: cluster,
        })
        .collect()
}
