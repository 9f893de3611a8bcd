//! End-to-end analysis: raw export bytes in, [`AnalysisReport`] out.
//!
//! ```text
//! bytes ─ decode ─ assemble ─ annotate ─ shifts + reducers ─ report
//! ```
//!
//! Each run is independent. The [`Analyzer`] only holds read-only
//! configuration, so one instance can serve many requests.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::pipeline::Analyzer;
//!
//! let text = "[2024-01-01, 10:00:00] Alice: hi\n[2024-01-01, 10:05:00] Bob: hello there";
//! let report = Analyzer::new().analyze_str(text)?;
//!
//! assert_eq!(report.metadata.total_messages, 2);
//! assert_eq!(report.additional_metrics.avg_response_times[0].seconds, 300.0);
//! # Ok::<(), chatpulse::ChatpulseError>(())
//! ```

use std::fmt;

use tracing::{debug, info, instrument};

use crate::config::AnalysisConfig;
use crate::error::{ChatpulseError, Result};
use crate::parsing::{Assembly, AssemblyOptions, LineClassifier, ParseStats, assemble, decode_lossy};
use crate::report::AnalysisReport;
use crate::sentiment::{LexiconScorer, PolarityScorer, annotate};

/// A finished run together with what happened to the input along the way.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    /// How the input lines were consumed
    pub stats: ParseStats,
    /// Invalid UTF-8 sequences dropped while decoding
    pub dropped_sequences: usize,
}

/// Runs the analysis pipeline with injected configuration.
pub struct Analyzer {
    config: AnalysisConfig,
    classifier: LineClassifier,
    scorer: Box<dyn PolarityScorer>,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
            classifier: LineClassifier::default(),
            scorer: Box::new(LexiconScorer::new()),
        }
    }
}

impl Analyzer {
    /// Creates an analyzer with default configuration and the bundled scorer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the polarity scorer.
    ///
    /// ```rust
    /// use chatpulse::pipeline::Analyzer;
    ///
    /// let analyzer = Analyzer::new().with_scorer(|text: &str| if text.contains('!') { 0.5 } else { 0.0 });
    /// let report = analyzer.analyze_str("[2024-01-01, 10:00:00] Alice: yes!")?;
    /// assert_eq!(report.messages[0].sentiment_polarity, 0.5);
    /// # Ok::<(), chatpulse::ChatpulseError>(())
    /// ```
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl PolarityScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Replaces the line classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: LineClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn assembly_options(&self) -> AssemblyOptions {
        AssemblyOptions {
            skip_system_messages: self.config.skip_system_messages,
        }
    }

    /// Assembles the message timeline without scoring it.
    ///
    /// # Errors
    ///
    /// Returns [`ChatpulseError::NoMessagesParsed`] when no line matches a
    /// supported format.
    pub fn parse(&self, content: &str) -> Result<Assembly> {
        let assembly = assemble(content, &self.classifier, self.assembly_options());
        debug!(stats = ?assembly.stats, "assembly finished");
        if assembly.messages.is_empty() {
            return Err(ChatpulseError::NoMessagesParsed);
        }
        Ok(assembly)
    }

    /// Analyzes an already decoded export.
    pub fn analyze_str(&self, content: &str) -> Result<AnalysisReport> {
        self.run_str(content).map(|outcome| outcome.report)
    }

    /// Analyzes raw upload bytes, dropping invalid UTF-8.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<AnalysisReport> {
        self.run(bytes).map(|outcome| outcome.report)
    }

    /// Like [`analyze_bytes`](Self::analyze_bytes), but also returns parse
    /// statistics.
    #[instrument(skip_all, fields(bytes = bytes.len()))]
    pub fn run(&self, bytes: &[u8]) -> Result<AnalysisOutcome> {
        let decoded = decode_lossy(bytes);
        let mut outcome = self.run_str(&decoded.text)?;
        outcome.dropped_sequences = decoded.dropped_sequences;
        Ok(outcome)
    }

    /// Like [`analyze_str`](Self::analyze_str), but also returns parse
    /// statistics.
    #[instrument(skip_all, fields(len = content.len()))]
    pub fn run_str(&self, content: &str) -> Result<AnalysisOutcome> {
        self.config.validate()?;

        let Assembly { messages, stats } = self.parse(content)?;
        let enriched = annotate(messages, self.scorer.as_ref(), &self.config);
        let report = AnalysisReport::build(enriched, &self.config)?;

        info!(
            messages = report.metadata.total_messages,
            participants = report.metadata.participants.len(),
            continuation_lines = stats.continuation_lines,
            rejected_dates = stats.rejected_dates,
            system_lines = stats.system_lines,
            "analysis complete"
        );

        Ok(AnalysisOutcome {
            report,
            stats,
            dropped_sequences: 0,
        })
    }
}

/// Analyzes raw upload bytes with the default [`Analyzer`].
pub fn analyze(bytes: &[u8]) -> Result<AnalysisReport> {
    Analyzer::new().analyze_bytes(bytes)
}
