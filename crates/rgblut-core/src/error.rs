//! Error types for rgblut-core operations.
//!
//! These cover buffer construction and addressing. Render-time setup failures
//! (missing curves, mismatched layouts) live in `rgblut-ops`.
//!
//! # Usage
//!
//! ```rust
//! use rgblut_core::{Components, Error, PixelBuffer, RenderWindow};
//!
//! let err = PixelBuffer::from_data(RenderWindow::from_size(2, 2), Components::Rgba, vec![0u8; 3])
//!     .unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```

use crate::RenderWindow;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or addressing pixel buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside the buffer bounds.
    #[error("pixel ({x}, {y}) out of bounds for {bounds}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: i32,
        /// Y coordinate that was out of bounds
        y: i32,
        /// Buffer bounds
        bounds: RenderWindow,
    },

    /// Buffer data does not match the declared bounds and component count.
    #[error("invalid dimensions for {bounds}: {reason}")]
    InvalidDimensions {
        /// Declared bounds
        bounds: RenderWindow,
        /// Reason why the dimensions are invalid
        reason: String,
    },

    /// Component count mismatch.
    #[error("component mismatch: expected {expected}, got {got}")]
    ComponentMismatch {
        /// Expected component count
        expected: usize,
        /// Actual component count
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: i32, y: i32, bounds: RenderWindow) -> Self {
        Self::OutOfBounds { x, y, bounds }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(bounds: RenderWindow, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            bounds,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ComponentMismatch`] error.
    #[inline]
    pub fn component_mismatch(expected: usize, got: usize) -> Self {
        Self::ComponentMismatch { expected, got }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
