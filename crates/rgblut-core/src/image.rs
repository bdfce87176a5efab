//! Pixel buffers addressed in host coordinates.
//!
//! - [`PixelBuffer`] - Owned, interleaved, row-major buffer of one component type
//! - [`ImageBuffer`] - Type-erased buffer, the form a host hands to a render call
//!
//! # Memory Layout
//!
//! Pixels are stored row-major, top-to-bottom, components interleaved:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- row y1
//!         [R G B A R G B A ...]  <- row y1 + 1
//!         ...
//! ```
//!
//! # Addressing
//!
//! A buffer covers `bounds`, a [`RenderWindow`] in host pixel space whose
//! origin may be anywhere, including negative coordinates. [`PixelBuffer::pixel`]
//! returns `None` for coordinates outside the bounds; a missing source pixel is
//! a defined condition, not an error.
//!
//! ```rust
//! use rgblut_core::{Components, PixelBuffer, RenderWindow};
//!
//! let mut img: PixelBuffer<u8> = PixelBuffer::new(RenderWindow::new(-1, -1, 1, 1), Components::Rgba);
//! img.set_pixel(-1, 0, &[10, 20, 30, 255]).unwrap();
//! assert_eq!(img.pixel(-1, 0), Some(&[10u8, 20, 30, 255][..]));
//! assert_eq!(img.pixel(1, 0), None);
//! ```

use crate::{BitDepth, Components, Error, PixelLayout, RenderWindow, Result, Sample};
use std::ops::Range;

/// Owned pixel buffer with a runtime component count.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer<T: Sample> {
    /// Interleaved pixel data
    data: Vec<T>,
    /// Covered region in host coordinates
    bounds: RenderWindow,
    /// Component layout
    components: Components,
}

impl<T: Sample> PixelBuffer<T> {
    /// Creates a zero-filled buffer covering `bounds`.
    pub fn new(bounds: RenderWindow, components: Components) -> Self {
        let len = bounds.area() * components.count();
        Self {
            data: vec![T::zero(); len],
            bounds,
            components,
        }
    }

    /// Creates a buffer from existing interleaved data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data` does not hold exactly
    /// `width * height * components` elements.
    pub fn from_data(bounds: RenderWindow, components: Components, data: Vec<T>) -> Result<Self> {
        let expected = bounds.area() * components.count();
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                bounds,
                format!("expected {} elements, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            bounds,
            components,
        })
    }

    /// Region covered by this buffer.
    #[inline]
    pub fn bounds(&self) -> RenderWindow {
        self.bounds
    }

    /// Component layout.
    #[inline]
    pub fn components(&self) -> Components {
        self.components
    }

    /// Full pixel layout.
    #[inline]
    pub fn layout(&self) -> PixelLayout {
        PixelLayout::new(T::DEPTH, self.components)
    }

    /// Number of elements in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.bounds.width() * self.components.count()
    }

    /// Raw interleaved data.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw interleaved data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let col = x.abs_diff(self.bounds.x1) as usize;
        let row = y.abs_diff(self.bounds.y1) as usize;
        Some((row * self.bounds.width() + col) * self.components.count())
    }

    /// Components of the pixel at (x, y), or `None` outside the bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<&[T]> {
        let nc = self.components.count();
        self.offset(x, y).map(|i| &self.data[i..i + nc])
    }

    /// Mutable components of the pixel at (x, y), or `None` outside the bounds.
    #[inline]
    pub fn pixel_mut(&mut self, x: i32, y: i32) -> Option<&mut [T]> {
        let nc = self.components.count();
        self.offset(x, y).map(move |i| &mut self.data[i..i + nc])
    }

    /// Writes one pixel.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfBounds`] if (x, y) is outside the bounds
    /// - [`Error::ComponentMismatch`] if `value` has the wrong length
    pub fn set_pixel(&mut self, x: i32, y: i32, value: &[T]) -> Result<()> {
        let nc = self.components.count();
        if value.len() != nc {
            return Err(Error::component_mismatch(nc, value.len()));
        }
        let bounds = self.bounds;
        let px = self
            .pixel_mut(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, bounds))?;
        px.copy_from_slice(value);
        Ok(())
    }

    /// Full row `y`, or `None` outside the bounds.
    pub fn row(&self, y: i32) -> Option<&[T]> {
        if !self.bounds.rows().contains(&y) {
            return None;
        }
        let len = self.row_len();
        let start = y.abs_diff(self.bounds.y1) as usize * len;
        Some(&self.data[start..start + len])
    }

    /// Contiguous band of full rows `ys`, or `None` if any row is outside the bounds.
    ///
    /// Splitting this band with `split_at_mut` yields disjoint row ranges that
    /// can be written concurrently.
    pub fn rows_mut(&mut self, ys: Range<i32>) -> Option<&mut [T]> {
        let rows = self.bounds.rows();
        if ys.start > ys.end || ys.start < rows.start || ys.end > rows.end {
            return None;
        }
        let len = self.row_len();
        let start = ys.start.abs_diff(rows.start) as usize * len;
        let end = ys.end.abs_diff(rows.start) as usize * len;
        Some(&mut self.data[start..end])
    }

    /// Fills every pixel with `value`.
    pub fn fill(&mut self, value: &[T]) -> Result<()> {
        let nc = self.components.count();
        if value.len() != nc {
            return Err(Error::component_mismatch(nc, value.len()));
        }
        for px in self.data.chunks_exact_mut(nc) {
            px.copy_from_slice(value);
        }
        Ok(())
    }
}

/// Type-erased pixel buffer.
///
/// Hosts pick the numeric kind at runtime; the render entry point matches on
/// this enum to select the LUT and kernel variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageBuffer {
    /// 8-bit integer pixels.
    U8(PixelBuffer<u8>),
    /// 16-bit integer pixels.
    U16(PixelBuffer<u16>),
    /// 32-bit float pixels.
    F32(PixelBuffer<f32>),
}

impl ImageBuffer {
    /// Creates a zero-filled buffer of the given layout.
    pub fn new(bounds: RenderWindow, layout: PixelLayout) -> Self {
        match layout.depth {
            BitDepth::U8 => Self::U8(PixelBuffer::new(bounds, layout.components)),
            BitDepth::U16 => Self::U16(PixelBuffer::new(bounds, layout.components)),
            BitDepth::F32 => Self::F32(PixelBuffer::new(bounds, layout.components)),
        }
    }

    /// Full pixel layout.
    pub fn layout(&self) -> PixelLayout {
        match self {
            Self::U8(b) => b.layout(),
            Self::U16(b) => b.layout(),
            Self::F32(b) => b.layout(),
        }
    }

    /// Numeric kind.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.layout().depth
    }

    /// Region covered.
    pub fn bounds(&self) -> RenderWindow {
        match self {
            Self::U8(b) => b.bounds(),
            Self::U16(b) => b.bounds(),
            Self::F32(b) => b.bounds(),
        }
    }

    /// Returns the 8-bit buffer, if that is what this is.
    pub fn as_u8(&self) -> Option<&PixelBuffer<u8>> {
        match self {
            Self::U8(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the 16-bit buffer, if that is what this is.
    pub fn as_u16(&self) -> Option<&PixelBuffer<u16>> {
        match self {
            Self::U16(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the float buffer, if that is what this is.
    pub fn as_f32(&self) -> Option<&PixelBuffer<f32>> {
        match self {
            Self::F32(b) => Some(b),
            _ => None,
        }
    }
}

impl From<PixelBuffer<u8>> for ImageBuffer {
    fn from(b: PixelBuffer<u8>) -> Self {
        Self::U8(b)
    }
}

impl From<PixelBuffer<u16>> for ImageBuffer {
    fn from(b: PixelBuffer<u16>) -> Self {
        Self::U16(b)
    }
}

impl From<PixelBuffer<f32>> for ImageBuffer {
    fn from(b: PixelBuffer<f32>) -> Self {
        Self::F32(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_length_checked() {
        let bounds = RenderWindow::from_size(2, 2);
        let ok = PixelBuffer::from_data(bounds, Components::Rgba, vec![0u8; 16]);
        assert!(ok.is_ok());

        let err = PixelBuffer::from_data(bounds, Components::Rgba, vec![0u8; 15]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_pixel_addressing_with_offset_origin() {
        let bounds = RenderWindow::new(10, 20, 13, 22);
        let data: Vec<u16> = (0..6).collect();
        let img = PixelBuffer::from_data(bounds, Components::Alpha, data).unwrap();

        assert_eq!(img.pixel(10, 20), Some(&[0u16][..]));
        assert_eq!(img.pixel(12, 20), Some(&[2u16][..]));
        assert_eq!(img.pixel(10, 21), Some(&[3u16][..]));
        assert_eq!(img.pixel(9, 20), None);
        assert_eq!(img.pixel(13, 21), None);
        assert_eq!(img.pixel(10, 22), None);
    }

    #[test]
    fn test_set_pixel_errors() {
        let mut img: PixelBuffer<f32> =
            PixelBuffer::new(RenderWindow::from_size(1, 1), Components::Rgba);
        assert!(img.set_pixel(0, 0, &[1.0, 2.0, 3.0, 4.0]).is_ok());
        assert!(img.set_pixel(1, 0, &[1.0, 2.0, 3.0, 4.0]).unwrap_err().is_bounds_error());
        assert!(matches!(
            img.set_pixel(0, 0, &[1.0]),
            Err(Error::ComponentMismatch { expected: 4, got: 1 })
        ));
    }

    #[test]
    fn test_rows_mut_band() {
        let bounds = RenderWindow::new(0, 5, 2, 9);
        let mut img: PixelBuffer<u8> = PixelBuffer::new(bounds, Components::Alpha);
        {
            let band = img.rows_mut(6..8).unwrap();
            assert_eq!(band.len(), 4);
            band.fill(7);
        }
        assert_eq!(img.row(5), Some(&[0u8, 0][..]));
        assert_eq!(img.row(6), Some(&[7u8, 7][..]));
        assert_eq!(img.row(7), Some(&[7u8, 7][..]));
        assert_eq!(img.row(8), Some(&[0u8, 0][..]));
        assert!(img.rows_mut(4..6).is_none());
        assert!(img.rows_mut(8..10).is_none());
    }

    #[test]
    fn test_image_buffer_layout() {
        let layout = PixelLayout::new(BitDepth::U16, Components::Rgba);
        let img = ImageBuffer::new(RenderWindow::from_size(3, 3), layout);
        assert_eq!(img.layout(), layout);
        assert_eq!(img.depth(), BitDepth::U16);
        assert!(img.as_u16().is_some());
        assert!(img.as_u8().is_none());
    }
}
