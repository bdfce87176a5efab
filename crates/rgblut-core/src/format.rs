//! Pixel representation descriptors.
//!
//! A host describes each image with two independent properties:
//!
//! - [`BitDepth`] - numeric kind of every component (8-bit, 16-bit, float)
//! - [`Components`] - how many components a pixel has (alpha-only or RGBA)
//!
//! [`PixelLayout`] pairs them. Source and destination must agree on the full
//! layout before any processing starts.
//!
//! # Usage
//!
//! ```rust
//! use rgblut_core::{BitDepth, Components, PixelLayout};
//!
//! let layout = PixelLayout::new(BitDepth::U16, Components::Rgba);
//! assert_eq!(layout.depth.lut_size(), 65536);
//! assert_eq!(layout.components.count(), 4);
//! assert_eq!(layout.to_string(), "RGBA/16-bit");
//! ```

use std::fmt;

/// Numeric kind of a pixel component.
///
/// # Variants
///
/// - `U8` - 8-bit unsigned [0, 255]
/// - `U16` - 16-bit unsigned [0, 65535]
/// - `F32` - 32-bit float, nominally [0, 1] but unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit single-precision float.
    #[default]
    F32,
}

impl BitDepth {
    /// Number of bits per component.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U16 => 16,
            Self::F32 => 32,
        }
    }

    /// Whether this is a floating-point format.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F32)
    }

    /// Whether this is an integer format.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        !self.is_float()
    }

    /// Number of entries per channel in a lookup table for this depth.
    ///
    /// Integer depths get one entry per representable value. Float pixels are
    /// unbounded, so they use a fixed sampling resolution of 1000 entries and
    /// interpolate between them.
    #[inline]
    pub const fn lut_size(&self) -> usize {
        match self {
            Self::U8 => 256,
            Self::U16 => 65536,
            Self::F32 => 1000,
        }
    }

    /// Nominal maximum component value (1.0 for float).
    #[inline]
    pub const fn max_value(&self) -> f64 {
        match self {
            Self::U8 => 255.0,
            Self::U16 => 65535.0,
            Self::F32 => 1.0,
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8 => write!(f, "8-bit"),
            Self::U16 => write!(f, "16-bit"),
            Self::F32 => write!(f, "float"),
        }
    }
}

/// Pixel component layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Components {
    /// Single component per pixel.
    ///
    /// Kernels remap it through the red table; it is not treated as alpha.
    Alpha,
    /// Red, green, blue, alpha. Alpha is never remapped.
    #[default]
    Rgba,
}

impl Components {
    /// Number of components per pixel.
    #[inline]
    pub const fn count(&self) -> usize {
        match self {
            Self::Alpha => 1,
            Self::Rgba => 4,
        }
    }

    /// Returns `true` if component index 3 is an alpha channel.
    #[inline]
    pub const fn has_alpha_channel(&self) -> bool {
        matches!(self, Self::Rgba)
    }

    /// Maps a component count back to a layout.
    pub const fn from_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::Alpha),
            4 => Some(Self::Rgba),
            _ => None,
        }
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alpha => write!(f, "A"),
            Self::Rgba => write!(f, "RGBA"),
        }
    }
}

/// Full pixel representation: numeric kind plus component layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelLayout {
    /// Numeric kind of every component.
    pub depth: BitDepth,
    /// Component layout.
    pub components: Components,
}

impl PixelLayout {
    /// Creates a layout from its two axes.
    #[inline]
    pub const fn new(depth: BitDepth, components: Components) -> Self {
        Self { depth, components }
    }
}

impl fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.components, self.depth)
    }
}
