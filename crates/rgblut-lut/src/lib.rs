//! # rgblut-lut
//!
//! Curve evaluation and lookup table construction.
//!
//! A render samples three user-authored curves (red, green, blue) at a fixed
//! number of positions and stores the results in an [`RgbLut`], quantized or
//! clamped for the target pixel depth.
//!
//! # Pieces
//!
//! - [`CurveEvaluator`] - The curve capability a host provides
//! - [`RgbCurves`], [`ControlPointCurve`] - A concrete control-point evaluator
//! - [`LutEntry`] - Per-depth table size and quantize rule
//! - [`LutBuilder`], [`RgbLut`] - Table construction and storage
//! - [`Blend`] - Interpolation mode for float pixels
//!
//! # Usage
//!
//! ```rust
//! use rgblut_lut::{CurveEvaluator, IdentityCurves, LutBuilder};
//!
//! let curves = IdentityCurves;
//! let lut = LutBuilder::new(Some(&curves as &dyn CurveEvaluator))
//!     .unwrap()
//!     .build::<u8>();
//! assert!(lut.is_identity());
//! ```
//!
//! # Dependencies
//!
//! - [`rgblut-core`] - Sample types and depths
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Build diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod curve;
mod entry;
mod error;
mod evaluator;
mod interp;
mod table;

pub use curve::{ControlPoint, ControlPointCurve, RgbCurves};
pub use entry::{LutEntry, LutIndex};
pub use error::{LutError, LutResult};
pub use evaluator::{Channel, ConstantCurves, CurveEvaluator, IdentityCurves};
pub use interp::Blend;
pub use table::{LutBuilder, RgbLut};
