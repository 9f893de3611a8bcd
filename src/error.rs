//! Unified error types for chatpulse.
//!
//! This module provides a single [`ChatpulseError`] enum that covers every
//! failure a caller can observe from the analysis pipeline.
//!
//! # Error Handling Philosophy
//!
//! - **Line-level problems are absorbed.** A line whose date does not parse,
//!   or invalid UTF-8 in the upload, never becomes an error value; both are
//!   counted and logged instead.
//! - **Total parse failure is distinct.** [`ChatpulseError::NoMessagesParsed`]
//!   maps to an "unprocessable input" status so callers can tell a bad
//!   upload apart from an internal fault.
//! - **Everything else aborts the report.** No partially populated report
//!   is ever returned.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatpulse operations.
///
/// # Example
///
/// ```rust
/// use chatpulse::error::Result;
/// use chatpulse::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatpulseError>;

/// The error type for all chatpulse operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatpulseError {
    /// No line of the input matched any supported chat format.
    ///
    /// This is a user-facing condition: resubmitting a valid export fixes it.
    #[error("Could not parse any messages.")]
    NoMessagesParsed,

    /// An I/O error occurred while reading input or writing the report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The report could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value was rejected by [`AnalysisConfig::validate`].
    ///
    /// [`AnalysisConfig::validate`]: crate::config::AnalysisConfig::validate
    #[error("Invalid configuration for `{field}`: {message}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// An unexpected internal fault while building the report.
    #[error("Analysis failed during {stage}: {message}")]
    Analysis {
        /// Pipeline stage that failed
        stage: &'static str,
        /// Description of the fault
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatpulseError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        ChatpulseError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Creates an internal analysis error.
    pub fn analysis(stage: &'static str, message: impl Into<String>) -> Self {
        ChatpulseError::Analysis {
            stage,
            message: message.into(),
        }
    }

    /// Returns `true` if no messages could be parsed from the input.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatpulseError::NoMessagesParsed)
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatpulseError::Io(_))
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatpulseError::InvalidConfig { .. })
    }

    /// HTTP-equivalent status for services embedding the pipeline.
    ///
    /// `422` for unparseable input, `400` for rejected configuration,
    /// `500` for everything else.
    pub fn status_code(&self) -> u16 {
        match self {
            ChatpulseError::NoMessagesParsed => 422,
            ChatpulseError::InvalidConfig { .. } => 400,
            _ => 500,
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChatpulseError::NoMessagesParsed => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_messages_is_distinct() {
        let err = ChatpulseError::NoMessagesParsed;
        assert!(err.is_no_messages());
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Could not parse any messages.");
    }

    #[test]
    fn test_internal_errors_are_generic() {
        let err = ChatpulseError::analysis("metadata", "empty timeline");
        assert!(!err.is_no_messages());
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("metadata"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing.txt");
        let err: ChatpulseError = io_err.into();
        assert!(err.is_io());
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_invalid_config() {
        let err = ChatpulseError::invalid_config("rolling_window", "must be at least 1");
        assert!(err.is_invalid_config());
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("rolling_window"));
    }
}
