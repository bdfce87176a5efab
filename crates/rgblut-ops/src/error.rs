//! Error types for rendering.

use rgblut_core::{PixelLayout, RenderWindow};
use rgblut_lut::LutError;
use thiserror::Error;

/// Error type for render setup.
///
/// All variants are raised before any destination pixel is written.
/// A cancelled render is not an error; see
/// [`RenderStatus`](crate::RenderStatus).
#[derive(Error, Debug)]
pub enum OpsError {
    /// The lookup table could not be prepared.
    #[error(transparent)]
    Lut(#[from] LutError),

    /// Source and destination disagree on depth or components.
    #[error("layout mismatch: source is {src}, destination is {dst}")]
    LayoutMismatch {
        /// Source layout
        src: PixelLayout,
        /// Destination layout
        dst: PixelLayout,
    },

    /// The render window is not inside the destination.
    #[error("render window {window} outside destination {bounds}")]
    WindowOutOfBounds {
        /// Requested window
        window: RenderWindow,
        /// Destination bounds
        bounds: RenderWindow,
    },
}

/// Result type for render operations.
pub type OpsResult<T> = Result<T, OpsError>;
