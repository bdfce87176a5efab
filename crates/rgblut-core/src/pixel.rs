//! Pixel component types.
//!
//! [`Sample`] is implemented for the three component types a host can hand
//! us: `u8`, `u16` and `f32`. Each carries its [`BitDepth`] so buffers know
//! their layout without extra bookkeeping.

use crate::BitDepth;
use std::fmt::Debug;

/// A single pixel component.
pub trait Sample: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    /// Numeric kind of this component type.
    const DEPTH: BitDepth;

    /// Zero value (black, fully transparent).
    #[inline]
    fn zero() -> Self {
        Self::default()
    }

    /// Converts to f64, unnormalized.
    fn to_f64(self) -> f64;
}

impl Sample for u8 {
    const DEPTH: BitDepth = BitDepth::U8;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Sample for u16 {
    const DEPTH: BitDepth = BitDepth::U16;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Sample for f32 {
    const DEPTH: BitDepth = BitDepth::F32;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_depths() {
        assert_eq!(<u8 as Sample>::DEPTH, BitDepth::U8);
        assert_eq!(<u16 as Sample>::DEPTH, BitDepth::U16);
        assert_eq!(<f32 as Sample>::DEPTH, BitDepth::F32);
    }

    #[test]
    fn test_zero() {
        assert_eq!(u8::zero(), 0);
        assert_eq!(u16::zero(), 0);
        assert_relative_eq!(f32::zero(), 0.0);
    }

    #[test]
    fn test_to_f64() {
        assert_relative_eq!(255u8.to_f64(), 255.0);
        assert_relative_eq!(65535u16.to_f64(), 65535.0);
        assert_relative_eq!(0.25f32.to_f64(), 0.25);
    }
}
