//! Error types for pattern generation.

use thiserror::Error;

/// Result type for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;

/// Errors that can occur while building a pattern WAV.
///
/// Every variant reflects a programming or configuration defect; none of
/// them is recoverable by retrying.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The serialized header has the wrong size.
    #[error("incorrect header length: expected {expected} bytes, got {actual}")]
    HeaderLength {
        /// Expected header size.
        expected: usize,
        /// Actual bytes written.
        actual: usize,
    },

    /// The finished buffer has the wrong size.
    #[error("incorrect total bytes: expected {expected}, got {actual}")]
    TotalLength {
        /// Expected total size (header + payload).
        expected: usize,
        /// Actual buffer size.
        actual: usize,
    },

    /// Pattern name is not one of `pitch`, `bands`, `pie`.
    #[error("unknown pattern '{name}' (expected one of: pitch, bands, pie)")]
    UnknownPattern {
        /// The name that was given.
        name: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A finished file does not start with the expected header.
    #[error("header does not match the expected layout at byte {offset}")]
    HeaderMismatch {
        /// First differing byte.
        offset: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PatternError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an unknown pattern error.
    pub fn unknown_pattern(name: impl Into<String>) -> Self {
        Self::UnknownPattern { name: name.into() }
    }

    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            PatternError::HeaderLength { .. } => "PATTERN_001",
            PatternError::TotalLength { .. } => "PATTERN_002",
            PatternError::UnknownPattern { .. } => "PATTERN_003",
            PatternError::InvalidParameter { .. } => "PATTERN_004",
            PatternError::Io(_) => "PATTERN_005",
            PatternError::HeaderMismatch { .. } => "PATTERN_006",
        }
    }
}
