//! Per-pixel LUT kernels.
//!
//! A kernel maps one source pixel to one destination pixel. Components 0..3
//! go through the red, green and blue tables; component 3 (alpha) is copied.
//! A single-component image is remapped through the red table. A missing
//! source pixel produces an all-zero destination pixel.

use rgblut_core::Sample;
use rgblut_lut::{Blend, LutIndex, RgbLut};

/// Transforms one pixel.
///
/// `src` and `dst` have the same component count. Implementations are
/// shared across worker threads and must not mutate internal state.
pub trait PixelKernel<T>: Sync {
    /// Writes the transformed `src` pixel into `dst`.
    fn apply(&self, src: Option<&[T]>, dst: &mut [T]);
}

/// Direct table lookup for `u8` and `u16` pixels.
#[derive(Debug, Clone, Copy)]
pub struct IntegerKernel<'a, T> {
    lut: &'a RgbLut<T>,
}

impl<'a, T: LutIndex> IntegerKernel<'a, T> {
    /// Creates a kernel over `lut`.
    pub fn new(lut: &'a RgbLut<T>) -> Self {
        Self { lut }
    }
}

impl<T: LutIndex> PixelKernel<T> for IntegerKernel<'_, T> {
    #[inline]
    fn apply(&self, src: Option<&[T]>, dst: &mut [T]) {
        let Some(src) = src else {
            dst.fill(T::zero());
            return;
        };
        for (c, (d, &s)) in dst.iter_mut().zip(src).enumerate() {
            *d = if c < 3 {
                let index = s.lut_index();
                debug_assert!(index < self.lut.size());
                self.lut.get(c, index)
            } else {
                s
            };
        }
    }
}

/// Interpolated lookup for `f32` pixels.
///
/// Values below 0 map to the first entry, values at or above 1 to the last
/// entry. NaN maps to the first entry.
#[derive(Debug, Clone, Copy)]
pub struct FloatKernel<'a> {
    lut: &'a RgbLut<f32>,
    blend: Blend,
}

impl<'a> FloatKernel<'a> {
    /// Creates a kernel over `lut` using `blend` between entries.
    pub fn new(lut: &'a RgbLut<f32>, blend: Blend) -> Self {
        Self { lut, blend }
    }

    #[inline]
    fn lookup(&self, table: &[f32], v: f32) -> f32 {
        if v.is_nan() || v < 0.0 {
            table[0]
        } else if v >= 1.0 {
            table[table.len() - 1]
        } else {
            self.blend.sample(table, v)
        }
    }
}

impl PixelKernel<f32> for FloatKernel<'_> {
    #[inline]
    fn apply(&self, src: Option<&[f32]>, dst: &mut [f32]) {
        let Some(src) = src else {
            dst.fill(0.0);
            return;
        };
        for (c, (d, &s)) in dst.iter_mut().zip(src).enumerate() {
            *d = if c < 3 {
                self.lookup(self.lut.component(c), s)
            } else {
                s
            };
        }
    }
}
