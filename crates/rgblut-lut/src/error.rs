//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while preparing a lookup table.
#[derive(Debug, Error)]
pub enum LutError {
    /// No curve evaluator is available to sample.
    ///
    /// This is a setup-time failure: the render cannot start without curves.
    #[error("curve evaluator unavailable: host does not provide parametric curves")]
    MissingEvaluator,

    /// A curve description could not be parsed.
    #[error("invalid curve: {0}")]
    InvalidCurve(String),

    /// An unknown option value.
    #[error("invalid {what}: {value}")]
    InvalidOption {
        /// Option name
        what: &'static str,
        /// Rejected value
        value: String,
    },
}
