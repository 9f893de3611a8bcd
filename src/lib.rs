//! # Chatpulse
//!
//! A Rust library for turning exported chat logs into a sentiment and
//! activity report.
//!
//! ## Overview
//!
//! Chatpulse reads plain-text chat exports in these line formats:
//! - **`[YYYY-MM-DD, HH:MM:SS] Sender: text`**
//! - **`YYYY-MM-DD, HH:MM:SS] Sender: text`**
//! - **`M/D/YY, H:MM AM - Sender: text`** (WhatsApp style)
//!
//! Lines that match none of them continue the previous message. The
//! resulting timeline is scored for sentiment, smoothed with a trailing
//! average, and summarized into activity, emoji, word and response-time
//! metrics.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatpulse::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = b"[2024-01-01, 10:00:00] Alice: hi\n[2024-01-01, 10:05:00] Bob: hello there";
//!
//!     let report = Analyzer::new().analyze_bytes(export)?;
//!     assert_eq!(report.metadata.total_messages, 2);
//!
//!     let json = report.to_json_pretty()?;
//!     assert!(json.contains("avg_response_times"));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`pipeline`] - [`Analyzer`](pipeline::Analyzer), the end-to-end entry point
//! - [`parsing`] - Line formats, message assembly, lenient decoding
//! - [`sentiment`] - Polarity scoring, rolling signals, shift detection
//! - [`metrics`] - Activity, emoji, starters, word cloud, response times
//! - [`report`] - [`AnalysisReport`](report::AnalysisReport) and its JSON shape
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig) and stop words
//! - [`error`] - Unified error types ([`ChatpulseError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod metrics;
pub mod parsing;
pub mod pipeline;
pub mod report;
pub mod sentiment;

// Re-export the main types at the crate root for convenience
pub use error::{ChatpulseError, Result};
pub use message::Message;
pub use pipeline::{Analyzer, analyze};
pub use report::AnalysisReport;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatpulse::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatpulseError, Result};

    pub use crate::config::{AnalysisConfig, StopWords};

    pub use crate::pipeline::{AnalysisOutcome, Analyzer, analyze};

    pub use crate::report::{AdditionalMetrics, AnalysisReport, Metadata};

    pub use crate::parsing::{FormatPattern, LineClassifier, ParseStats};

    pub use crate::sentiment::{EnrichedMessage, LexiconScorer, PolarityScorer, SentimentShiftSet};
}
