//! Error types for DSP operations.

use thiserror::Error;

/// Errors that can occur during DSP operations.
#[derive(Debug, Error)]
pub enum DspError {
    /// A precondition on an argument was violated.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input length mismatch.
    #[error("Input length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The FFT backend rejected a transform.
    #[error("Transform failed: {0}")]
    Transform(String),
}

impl DspError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Result type for DSP operations.
pub type DspResult<T> = Result<T, DspError>;
