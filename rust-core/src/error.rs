//! Error types for the numeric core

use thiserror::Error;

/// Errors raised by signal construction, windowing and spectrum evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DspError {
    /// A caller-supplied argument violates a precondition (e.g. even window width)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Index and amplitude arrays differ in length
    #[error("Length mismatch: {expected} indices but {actual} amplitudes")]
    LengthMismatch { expected: usize, actual: usize },

    /// Index array is not a contiguous ascending integer range
    #[error("Non-contiguous support at position {position}: expected index {expected}, found {found}")]
    NonContiguousSupport {
        position: usize,
        expected: i64,
        found: i64,
    },

    /// A signal needs at least one sample
    #[error("Signal has no samples")]
    EmptySignal,

    /// A support bound does not fit in an i64 index
    #[error("Index overflow: {0}")]
    IndexOverflow(String),
}

/// Result type for numeric core operations
pub type DspResult<T> = Result<T, DspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DspError::InvalidArgument("window width must be odd, got 4".into());
        assert_eq!(err.to_string(), "Invalid argument: window width must be odd, got 4");

        let err = DspError::NonContiguousSupport { position: 2, expected: 3, found: 5 };
        assert!(err.to_string().contains("expected index 3, found 5"));
    }
}
