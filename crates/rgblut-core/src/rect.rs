//! Render window type.
//!
//! A [`RenderWindow`] is the rectangle of destination pixels a single render
//! call must populate. It is also used for buffer bounds, since hosts address
//! images in a shared pixel coordinate system whose origin may lie outside
//! any given image.
//!
//! # Coordinate System
//!
//! - Coordinates are signed (`i32`), matching host pixel space
//! - Both axes are half-open: `x` in `[x1, x2)`, `y` in `[y1, y2)`
//! - Y increases downward; rows are stored top to bottom
//!
//! ```text
//! (x1,y1) ──────────► X
//!    │  ┌───────────┐
//!    │  │  window   │
//!    │  └───────────┘ (x2,y2) exclusive
//!    ▼
//!    Y
//! ```
//!
//! # Usage
//!
//! ```rust
//! use rgblut_core::RenderWindow;
//!
//! let window = RenderWindow::new(0, 0, 2, 1);
//! assert_eq!(window.width(), 2);
//! assert_eq!(window.height(), 1);
//! assert!(window.contains(1, 0));
//! assert!(!window.contains(2, 0));
//! ```

use std::fmt;
use std::ops::Range;

/// Axis-aligned integer rectangle, half-open on both axes.
///
/// # Invariants
///
/// A window with `x2 <= x1` or `y2 <= y1` is empty; its width/height report 0
/// and it contains no pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RenderWindow {
    /// Left edge (inclusive)
    pub x1: i32,
    /// Top edge (inclusive)
    pub y1: i32,
    /// Right edge (exclusive)
    pub x2: i32,
    /// Bottom edge (exclusive)
    pub y2: i32,
}

impl RenderWindow {
    /// Creates a window from its corner coordinates.
    #[inline]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Creates a window at the origin with the given size.
    ///
    /// ```rust
    /// use rgblut_core::RenderWindow;
    ///
    /// let window = RenderWindow::from_size(1920, 1080);
    /// assert_eq!(window, RenderWindow::new(0, 0, 1920, 1080));
    /// ```
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    /// Width in pixels (0 for inverted windows).
    #[inline]
    pub const fn width(&self) -> usize {
        if self.x2 > self.x1 {
            self.x2.abs_diff(self.x1) as usize
        } else {
            0
        }
    }

    /// Height in pixels (0 for inverted windows).
    #[inline]
    pub const fn height(&self) -> usize {
        if self.y2 > self.y1 {
            self.y2.abs_diff(self.y1) as usize
        } else {
            0
        }
    }

    /// Number of pixels covered.
    #[inline]
    pub const fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Returns `true` if the window covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Returns `true` if the pixel (x, y) lies inside the window.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }

    /// Returns `true` if `other` lies fully inside this window.
    ///
    /// Empty windows are contained in everything.
    ///
    /// ```rust
    /// use rgblut_core::RenderWindow;
    ///
    /// let bounds = RenderWindow::new(-10, -10, 100, 100);
    /// assert!(bounds.contains_window(&RenderWindow::new(0, 0, 100, 50)));
    /// assert!(!bounds.contains_window(&RenderWindow::new(0, 0, 101, 50)));
    /// ```
    #[inline]
    pub const fn contains_window(&self, other: &RenderWindow) -> bool {
        if other.is_empty() {
            return true;
        }
        other.x1 >= self.x1 && other.y1 >= self.y1 && other.x2 <= self.x2 && other.y2 <= self.y2
    }

    /// Returns the overlap of two windows, or `None` if they are disjoint.
    ///
    /// ```rust
    /// use rgblut_core::RenderWindow;
    ///
    /// let a = RenderWindow::new(0, 0, 100, 100);
    /// let b = RenderWindow::new(50, 50, 150, 150);
    /// assert_eq!(a.intersect(&b), Some(RenderWindow::new(50, 50, 100, 100)));
    /// ```
    #[inline]
    pub fn intersect(&self, other: &RenderWindow) -> Option<RenderWindow> {
        let out = RenderWindow::new(
            self.x1.max(other.x1),
            self.y1.max(other.y1),
            self.x2.min(other.x2),
            self.y2.min(other.y2),
        );
        if out.is_empty() { None } else { Some(out) }
    }

    /// Row range `y1..y2` (empty for inverted windows).
    #[inline]
    pub fn rows(&self) -> Range<i32> {
        self.y1..self.y2.max(self.y1)
    }

    /// Column range `x1..x2` (empty for inverted windows).
    #[inline]
    pub fn columns(&self) -> Range<i32> {
        self.x1..self.x2.max(self.x1)
    }

    /// Returns a window with the same x extent covering rows `[y1, y2)`.
    #[inline]
    pub const fn with_rows(&self, y1: i32, y2: i32) -> RenderWindow {
        RenderWindow::new(self.x1, y1, self.x2, y2)
    }
}

impl fmt::Display for RenderWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RenderWindow({}, {}, {}, {}) {}x{}",
            self.x1,
            self.y1,
            self.x2,
            self.y2,
            self.width(),
            self.height()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let w = RenderWindow::new(-5, 10, 15, 30);
        assert_eq!(w.width(), 20);
        assert_eq!(w.height(), 20);
        assert_eq!(w.area(), 400);
        assert!(!w.is_empty());
    }

    #[test]
    fn test_inverted_is_empty() {
        let w = RenderWindow::new(10, 10, 5, 20);
        assert_eq!(w.width(), 0);
        assert!(w.is_empty());
        assert_eq!(w.columns().len(), 0);
        assert!(!w.contains(7, 15));
    }

    #[test]
    fn test_half_open() {
        let w = RenderWindow::new(0, 0, 2, 1);
        assert!(w.contains(0, 0));
        assert!(w.contains(1, 0));
        assert!(!w.contains(2, 0));
        assert!(!w.contains(0, 1));
        assert!(!w.contains(-1, 0));
    }

    #[test]
    fn test_intersect_disjoint() {
        let a = RenderWindow::new(0, 0, 10, 10);
        let b = RenderWindow::new(10, 0, 20, 10);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn test_rows_and_with_rows() {
        let w = RenderWindow::new(3, 4, 8, 9);
        assert_eq!(w.rows(), 4..9);
        assert_eq!(w.columns(), 3..8);
        assert_eq!(w.with_rows(5, 6), RenderWindow::new(3, 5, 8, 6));
    }

    #[test]
    fn test_display() {
        let w = RenderWindow::new(0, 0, 80, 60);
        assert_eq!(w.to_string(), "RenderWindow(0, 0, 80, 60) 80x60");
    }

    #[test]
    fn test_extreme_coordinates() {
        let w = RenderWindow::new(i32::MIN, 0, i32::MAX, 1);
        assert_eq!(w.width(), u32::MAX as usize);
        assert_eq!(w.height(), 1);
        assert!(!w.is_empty());
        assert_eq!(w.columns(), i32::MIN..i32::MAX);
        assert_eq!(w.rows(), 0..1);
        assert_eq!(w.to_string(), format!("RenderWindow({}, 0, {}, 1) {}x1", i32::MIN, i32::MAX, u32::MAX));

        let inverted = RenderWindow::new(i32::MAX, i32::MAX, i32::MIN, i32::MIN);
        assert!(inverted.is_empty());
        assert_eq!(inverted.rows().len(), 0);
        assert_eq!(inverted.columns().len(), 0);
    }
}
