//! Row partitioning of a render window.
//!
//! The window is cut into horizontal bands that span its full width. Bands
//! are contiguous and disjoint, so each one maps onto its own `&mut` slice
//! of the destination.

use rgblut_core::RenderWindow;

/// Splits `window` into at most `tiles` row bands.
///
/// Band heights differ by at most one row, taller bands first. No band is
/// empty, so a window shorter than `tiles` rows yields one band per row.
/// An empty window yields no bands. `tiles == 0` is treated as 1.
///
/// # Example
///
/// ```rust
/// use rgblut_core::RenderWindow;
/// use rgblut_ops::tiles::split_rows;
///
/// let bands = split_rows(RenderWindow::new(0, 0, 8, 10), 3);
/// let heights: Vec<usize> = bands.iter().map(|b| b.height()).collect();
/// assert_eq!(heights, vec![4, 3, 3]);
/// ```
pub fn split_rows(window: RenderWindow, tiles: usize) -> Vec<RenderWindow> {
    if window.is_empty() {
        return Vec::new();
    }

    let height = window.height();
    let count = tiles.clamp(1, height);
    let base = height / count;
    let extra = height % count;

    let mut bands = Vec::with_capacity(count);
    let mut y = window.y1;
    for i in 0..count {
        let rows = base + usize::from(i < extra);
        let next = y.saturating_add_unsigned(rows as u32);
        bands.push(window.with_rows(y, next));
        y = next;
    }
    bands
}
