//! # rgblut-core
//!
//! Core types for applying per-channel lookup tables to images.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace:
//!
//! - [`BitDepth`], [`Components`], [`PixelLayout`] - Pixel representation descriptors
//! - [`RenderWindow`] - Half-open integer rectangle a render call must populate
//! - [`PixelBuffer`], [`ImageBuffer`] - Host-addressed interleaved pixel storage
//! - [`AbortSignal`], [`AbortFlag`] - Cooperative cancellation
//!
//! ## Design
//!
//! A pixel representation has two independent axes: the numeric kind
//! ([`BitDepth`]) and the component count ([`Components`]). Buffers are generic
//! over the numeric kind through the [`Sample`] trait and carry their component
//! count at runtime, so the two axes are only composed at dispatch time.
//!
//! ```text
//! rgblut-core (this crate)
//!    ^
//!    |
//!    +-- rgblut-lut (curve evaluation, LUT construction)
//!    +-- rgblut-ops (pixel kernels, tiled engine, render entry)
//!    +-- rgblut-cli (stand-in host)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod abort;
pub mod error;
pub mod format;
pub mod image;
pub mod pixel;
pub mod rect;

pub use abort::{AbortFlag, AbortSignal, NeverAbort};
pub use error::{Error, Result};
pub use format::{BitDepth, Components, PixelLayout};
pub use image::{ImageBuffer, PixelBuffer};
pub use pixel::Sample;
pub use rect::RenderWindow;
