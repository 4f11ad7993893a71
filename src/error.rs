//! Error types for the anofox-trend library.

use thiserror::Error;

/// Result type alias for segmentation operations.
pub type Result<T> = std::result::Result<T, SegmentError>;

/// Errors that can occur while tagging or segmenting a series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Dimension mismatch between x and y values.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Malformed input values (non-finite, non-increasing x).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid search configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Two interval endpoints share the same x.
    #[error("degenerate interval: [{start}, {end}] has zero width")]
    DegenerateInterval { start: f64, end: f64 },

    /// Breakpoints rejected by the piecewise fit.
    #[error("invalid breakpoints: {0}")]
    InvalidBreakpoints(String),

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    Computation(String),

    /// The threshold search ran out of trials.
    #[error("threshold search did not converge after {trials} trials")]
    NotConverged { trials: usize },
}
