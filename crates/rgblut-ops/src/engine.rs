//! Tiled, cancellable processing engine.
//!
//! The render window is split into row bands ([`split_rows`]). Each band
//! owns a disjoint `&mut` slice of the destination and is handed to rayon;
//! the source and the kernel are shared read-only. Before every row the
//! worker polls the abort signal and stops its band once it is raised.
//!
//! ```text
//!   dst rows   +-----------------+
//!   window.y1  | band 0 (thread) |
//!              | band 1 (thread) |
//!              | band 2 (thread) |
//!   window.y2  +-----------------+
//! ```

use crate::kernel::PixelKernel;
use crate::tiles::split_rows;
use crate::{OpsError, OpsResult};
use rayon::prelude::*;
use rgblut_core::{AbortSignal, PixelBuffer, RenderWindow, Sample};
use tracing::{debug, trace};

/// Outcome of a render that passed setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// Every row of the window was written.
    Completed,
    /// The abort signal stopped the render early.
    ///
    /// The destination holds a mix of new and stale rows and must not be
    /// treated as a finished frame.
    Aborted {
        /// Rows fully written before the workers stopped.
        rows_written: usize,
    },
}

impl RenderStatus {
    /// Returns `true` if every row was written.
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, RenderStatus::Completed)
    }

    /// Returns `true` if the render was cancelled.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self, RenderStatus::Aborted { .. })
    }
}

/// Applies `kernel` to every pixel of `window`.
///
/// Destination pixel (x, y) is computed from the source pixel at the same
/// coordinates, or from `None` where the source has no pixel. Pixels of
/// `dst` outside `window` are left untouched.
///
/// `threads` is the number of row bands; 0 uses the size of the current rayon
/// pool.
///
/// # Errors
///
/// - [`OpsError::WindowOutOfBounds`] if `window` is not inside `dst`
/// - [`OpsError::LayoutMismatch`] if `src` has a different component count
///
/// Nothing is written when an error is returned.
pub fn process<T, K, A>(
    dst: &mut PixelBuffer<T>,
    src: Option<&PixelBuffer<T>>,
    kernel: &K,
    window: RenderWindow,
    threads: usize,
    abort: &A,
) -> OpsResult<RenderStatus>
where
    T: Sample,
    K: PixelKernel<T> + ?Sized,
    A: AbortSignal + ?Sized,
{
    trace!(window = %window, threads, has_src = src.is_some(), "process");

    let bounds = dst.bounds();
    if !bounds.contains_window(&window) {
        return Err(OpsError::WindowOutOfBounds { window, bounds });
    }
    if let Some(src) = src {
        if src.components() != dst.components() {
            return Err(OpsError::LayoutMismatch {
                src: src.layout(),
                dst: dst.layout(),
            });
        }
    }
    if window.is_empty() {
        return Ok(RenderStatus::Completed);
    }

    let threads = if threads == 0 {
        rayon::current_num_threads()
    } else {
        threads
    };
    let tiles = split_rows(window, threads);
    debug!(tiles = tiles.len(), rows = window.height(), "Processing render window");

    let row_len = dst.row_len();
    let band = dst
        .rows_mut(window.rows())
        .ok_or(OpsError::WindowOutOfBounds { window, bounds })?;

    let mut rest = band;
    let mut jobs = Vec::with_capacity(tiles.len());
    for tile in tiles {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(tile.height() * row_len);
        jobs.push((tile, head));
        rest = tail;
    }

    let run = |(tile, rows): (RenderWindow, &mut [T])| {
        process_tile(tile, rows, bounds, src, kernel, abort)
    };
    let results: Vec<TileResult> = if jobs.len() == 1 {
        jobs.into_iter().map(run).collect()
    } else {
        jobs.into_par_iter().map(run).collect()
    };

    let rows_written = results.iter().map(|r| r.rows_written).sum();
    if results.iter().any(|r| r.aborted) {
        debug!(rows_written, "Render aborted");
        Ok(RenderStatus::Aborted { rows_written })
    } else {
        Ok(RenderStatus::Completed)
    }
}

struct TileResult {
    rows_written: usize,
    aborted: bool,
}

/// Runs one band. `rows` starts at `tile.y1` and spans the full
/// destination width.
fn process_tile<T, K, A>(
    tile: RenderWindow,
    rows: &mut [T],
    bounds: RenderWindow,
    src: Option<&PixelBuffer<T>>,
    kernel: &K,
    abort: &A,
) -> TileResult
where
    T: Sample,
    K: PixelKernel<T> + ?Sized,
    A: AbortSignal + ?Sized,
{
    let row_len = rows.len() / tile.height();
    let n = row_len / bounds.width();
    let mut rows_written = 0;

    for (row, y) in rows.chunks_exact_mut(row_len).zip(tile.rows()) {
        if abort.is_aborted() {
            return TileResult { rows_written, aborted: true };
        }
        for x in tile.columns() {
            let at = x.abs_diff(bounds.x1) as usize * n;
            kernel.apply(src.and_then(|s| s.pixel(x, y)), &mut row[at..at + n]);
        }
        rows_written += 1;
    }

    TileResult { rows_written, aborted: false }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgblut_core::{AbortFlag, Components, NeverAbort};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Adds one to every component.
    struct Increment;

    impl PixelKernel<u8> for Increment {
        fn apply(&self, src: Option<&[u8]>, dst: &mut [u8]) {
            match src {
                Some(src) => {
                    for (d, s) in dst.iter_mut().zip(src) {
                        *d = s.wrapping_add(1);
                    }
                }
                None => dst.fill(0),
            }
        }
    }

    fn ramp(bounds: RenderWindow) -> PixelBuffer<u8> {
        let n = bounds.area() * 4;
        let data = (0..n).map(|i| (i % 200) as u8).collect();
        PixelBuffer::from_data(bounds, Components::Rgba, data).unwrap()
    }

    #[test]
    fn test_full_window_all_threads() {
        let bounds = RenderWindow::new(-2, -3, 13, 20);
        let src = ramp(bounds);
        for threads in [0, 1, 2, 3, 7, 64] {
            let mut dst = PixelBuffer::new(bounds, Components::Rgba);
            let status = process(&mut dst, Some(&src), &Increment, bounds, threads, &NeverAbort).unwrap();
            assert_eq!(status, RenderStatus::Completed);
            for (d, s) in dst.data().iter().zip(src.data()) {
                assert_eq!(*d, s + 1);
            }
        }
    }

    #[test]
    fn test_outside_window_untouched() {
        let bounds = RenderWindow::new(0, 0, 6, 6);
        let src = ramp(bounds);
        let mut dst = PixelBuffer::new(bounds, Components::Rgba);
        dst.fill(&[99, 99, 99, 99]).unwrap();

        let window = RenderWindow::new(1, 2, 4, 5);
        process(&mut dst, Some(&src), &Increment, window, 2, &NeverAbort).unwrap();

        for y in bounds.rows() {
            for x in bounds.columns() {
                let got = dst.pixel(x, y).unwrap();
                if window.contains(x, y) {
                    let s = src.pixel(x, y).unwrap();
                    assert_eq!(got[0], s[0] + 1);
                } else {
                    assert_eq!(got, &[99, 99, 99, 99]);
                }
            }
        }
    }

    #[test]
    fn test_missing_source_pixels_are_zero() {
        let bounds = RenderWindow::new(0, 0, 4, 4);
        // source covers only the left half
        let src = ramp(RenderWindow::new(0, 0, 2, 4));
        let mut dst = PixelBuffer::new(bounds, Components::Rgba);
        dst.fill(&[5, 5, 5, 5]).unwrap();

        process(&mut dst, Some(&src), &Increment, bounds, 2, &NeverAbort).unwrap();
        assert_eq!(dst.pixel(3, 1).unwrap(), &[0, 0, 0, 0]);
        assert_eq!(dst.pixel(0, 0).unwrap()[0], src.pixel(0, 0).unwrap()[0] + 1);

        process(&mut dst, None, &Increment, bounds, 2, &NeverAbort).unwrap();
        assert!(dst.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_window_out_of_bounds() {
        let bounds = RenderWindow::new(0, 0, 4, 4);
        let src = ramp(bounds);
        let mut dst = PixelBuffer::new(bounds, Components::Rgba);
        let err = process(&mut dst, Some(&src), &Increment, RenderWindow::new(0, 0, 5, 4), 1, &NeverAbort)
            .unwrap_err();
        assert!(matches!(err, OpsError::WindowOutOfBounds { .. }));
        assert!(dst.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_component_mismatch() {
        let bounds = RenderWindow::new(0, 0, 4, 4);
        let src = PixelBuffer::<u8>::new(bounds, Components::Alpha);
        let mut dst = PixelBuffer::new(bounds, Components::Rgba);
        let err = process(&mut dst, Some(&src), &Increment, bounds, 1, &NeverAbort).unwrap_err();
        assert!(matches!(err, OpsError::LayoutMismatch { .. }));
    }

    #[test]
    fn test_empty_window_completes() {
        let bounds = RenderWindow::new(0, 0, 4, 4);
        let mut dst = PixelBuffer::<u8>::new(bounds, Components::Rgba);
        let status = process(&mut dst, None, &Increment, RenderWindow::new(2, 2, 2, 4), 4, &NeverAbort).unwrap();
        assert!(status.is_completed());
    }

    #[test]
    fn test_abort_before_start_writes_nothing() {
        let bounds = RenderWindow::new(0, 0, 8, 8);
        let src = ramp(bounds);
        let mut dst = PixelBuffer::new(bounds, Components::Rgba);
        let flag = AbortFlag::new();
        flag.abort();

        let status = process(&mut dst, Some(&src), &Increment, bounds, 4, &flag).unwrap();
        assert_eq!(status, RenderStatus::Aborted { rows_written: 0 });
        assert!(dst.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_abort_midway_single_tile() {
        let bounds = RenderWindow::new(0, 0, 3, 10);
        let src = ramp(bounds);
        let mut dst = PixelBuffer::new(bounds, Components::Rgba);
        dst.fill(&[250, 250, 250, 250]).unwrap();

        // allow exactly four rows, then raise the signal
        let polls = AtomicUsize::new(0);
        let abort = || polls.fetch_add(1, Ordering::Relaxed) >= 4;

        let status = process(&mut dst, Some(&src), &Increment, bounds, 1, &abort).unwrap();
        assert_eq!(status, RenderStatus::Aborted { rows_written: 4 });
        for y in 0..10 {
            let row = dst.row(y).unwrap();
            let fresh = row.iter().zip(src.row(y).unwrap()).all(|(d, s)| *d == s + 1);
            assert_eq!(fresh, y < 4, "row {y}");
        }
    }

    #[test]
    fn test_abort_is_monotonic_across_tiles() {
        let bounds = RenderWindow::new(0, 0, 5, 40);
        let src = ramp(bounds);
        let mut dst = PixelBuffer::new(bounds, Components::Rgba);
        dst.fill(&[250, 250, 250, 250]).unwrap();

        let polls = AtomicUsize::new(0);
        let abort = || polls.fetch_add(1, Ordering::Relaxed) >= 9;
        let status = process(&mut dst, Some(&src), &Increment, bounds, 4, &abort).unwrap();

        let RenderStatus::Aborted { rows_written } = status else {
            panic!("expected abort, got {status:?}");
        };
        assert!(rows_written <= 9);

        // within each band, written rows form a prefix
        let mut fresh_rows = 0;
        for band in split_rows(bounds, 4) {
            let mut seen_stale = false;
            for y in band.rows() {
                let fresh = dst.row(y).unwrap().iter().zip(src.row(y).unwrap()).all(|(d, s)| *d == s + 1);
                if fresh {
                    assert!(!seen_stale, "row {y} written after a skipped row");
                    fresh_rows += 1;
                } else {
                    seen_stale = true;
                }
            }
        }
        assert_eq!(fresh_rows, rows_written);
    }
}
