//! Sentiment scoring and timeline signals.
//!
//! - [`scorer`] - The [`PolarityScorer`] seam and the bundled [`LexiconScorer`]
//! - [`annotator`] - Rolling average and negativity clusters
//! - [`shifts`] - Sharpest rises and drops of the rolling average

pub mod annotator;
pub mod scorer;
pub mod shifts;

pub use annotator::{
    EnrichedMessage, annotate, annotate_with_polarities, negativity_clusters, rolling_mean,
};
pub use scorer::{LexiconScorer, PolarityScorer};
pub use shifts::{SentimentShiftSet, find_sentiment_shifts, rolling_diffs};
