//! Per-depth table rules.
//!
//! | depth | entries | stored value                                   |
//! |-------|---------|------------------------------------------------|
//! | u8    | 256     | `floor(v * 255 + 0.5)` clamped to [0, 255]     |
//! | u16   | 65536   | `floor(v * 65535 + 0.5)` clamped to [0, 65535] |
//! | f32   | 1000    | `v` clamped to [0, 999], not scaled            |

use rgblut_core::Sample;

/// A component type that can be stored in a lookup table.
pub trait LutEntry: Sample {
    /// Entries per channel.
    const LUT_SIZE: usize;

    /// Converts a curve value into a table entry.
    fn quantize(value: f64) -> Self;
}

/// An integer component that directly indexes a table.
pub trait LutIndex: LutEntry {
    /// Table index for this component value; always `< LUT_SIZE`.
    fn lut_index(self) -> usize;
}

#[inline]
fn round_half_up(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    (value * max + 0.5).floor().clamp(0.0, max)
}

impl LutEntry for u8 {
    const LUT_SIZE: usize = 256;

    #[inline]
    fn quantize(value: f64) -> Self {
        round_half_up(value, 255.0) as u8
    }
}

impl LutIndex for u8 {
    #[inline]
    fn lut_index(self) -> usize {
        self as usize
    }
}

impl LutEntry for u16 {
    const LUT_SIZE: usize = 65536;

    #[inline]
    fn quantize(value: f64) -> Self {
        round_half_up(value, 65535.0) as u16
    }
}

impl LutIndex for u16 {
    #[inline]
    fn lut_index(self) -> usize {
        self as usize
    }
}

impl LutEntry for f32 {
    const LUT_SIZE: usize = 1000;

    #[inline]
    fn quantize(value: f64) -> Self {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, (Self::LUT_SIZE - 1) as f64) as f32
    }
}
