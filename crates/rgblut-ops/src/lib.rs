//! # rgblut-ops
//!
//! Pixel kernels and the tiled render engine for per-channel LUTs.
//!
//! # Modules
//!
//! - [`kernel`] - Integer and float per-pixel LUT application
//! - [`tiles`] - Row partitioning of the render window
//! - [`engine`] - Parallel, cancellable processing of a window
//! - [`render`] - Host-facing entry point tying the pieces together
//!
//! # Example
//!
//! ```rust
//! use rgblut_core::{Components, ImageBuffer, NeverAbort, PixelBuffer, RenderWindow};
//! use rgblut_lut::{ConstantCurves, CurveEvaluator};
//! use rgblut_ops::{RenderArgs, RenderOptions, render};
//!
//! let bounds = RenderWindow::from_size(64, 64);
//! let src = ImageBuffer::from(PixelBuffer::<f32>::new(bounds, Components::Rgba));
//! let mut dst = ImageBuffer::new(bounds, src.layout());
//!
//! let curves = ConstantCurves([0.25, 0.5, 0.75]);
//! let args = RenderArgs::new(bounds).with_options(RenderOptions::default().with_threads(4));
//! let status = render(Some(&curves as &dyn CurveEvaluator), &mut dst, Some(&src), args, &NeverAbort)?;
//! assert!(status.is_completed());
//! # Ok::<(), rgblut_ops::OpsError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`rgblut-core`] - Buffers, windows, abort signal
//! - [`rgblut-lut`] - Table construction
//! - [`rayon`] - Parallel row bands
//! - [`tracing`] - Diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod options;
pub mod engine;
pub mod kernel;
pub mod render;
pub mod tiles;

pub use engine::{RenderStatus, process};
pub use error::{OpsError, OpsResult};
pub use kernel::{FloatKernel, IntegerKernel, PixelKernel};
pub use options::RenderOptions;
pub use render::{RenderArgs, render};
