//! Render entry point.
//!
//! One call per host render request:
//!
//! 1. Setup checks: curves present, source and destination layouts agree.
//! 2. Build the lookup table for the destination depth.
//! 3. Pick the integer or float kernel.
//! 4. Run the tiled engine over the render window.
//!
//! Setup failures return an error before any destination pixel is written.

use crate::engine::{RenderStatus, process};
use crate::kernel::{FloatKernel, IntegerKernel};
use crate::{OpsError, OpsResult, RenderOptions};
use rgblut_core::{AbortSignal, ImageBuffer, RenderWindow};
use rgblut_lut::{CurveEvaluator, LutBuilder};
use tracing::{debug, trace};

/// Per-request render parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderArgs {
    /// Time the curves are sampled at.
    pub time: f64,
    /// Destination region to compute.
    pub window: RenderWindow,
    /// Threading and interpolation settings.
    pub options: RenderOptions,
}

impl RenderArgs {
    /// Renders `window` at time 0 with default options.
    pub fn new(window: RenderWindow) -> Self {
        Self {
            time: 0.0,
            window,
            options: RenderOptions::default(),
        }
    }

    /// Sets the sample time.
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Sets the render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }
}

/// Applies the RGB curves to `src`, writing `args.window` of `dst`.
///
/// # Example
///
/// ```rust
/// use rgblut_core::{Components, ImageBuffer, NeverAbort, PixelBuffer, RenderWindow};
/// use rgblut_lut::{CurveEvaluator, IdentityCurves};
/// use rgblut_ops::{RenderArgs, render};
///
/// let bounds = RenderWindow::from_size(2, 1);
/// let pixels = vec![10u8, 20, 30, 255, 200, 100, 50, 128];
/// let src = ImageBuffer::from(PixelBuffer::from_data(bounds, Components::Rgba, pixels.clone()).unwrap());
/// let mut dst = ImageBuffer::from(PixelBuffer::<u8>::new(bounds, Components::Rgba));
///
/// let curves = IdentityCurves;
/// let status = render(
///     Some(&curves as &dyn CurveEvaluator),
///     &mut dst,
///     Some(&src),
///     RenderArgs::new(bounds),
///     &NeverAbort,
/// )
/// .unwrap();
/// assert!(status.is_completed());
/// assert_eq!(dst.as_u8().unwrap().data(), &pixels[..]);
/// ```
///
/// # Errors
///
/// - [`OpsError::Lut`] if `curves` is `None`
/// - [`OpsError::LayoutMismatch`] if `src` and `dst` differ in depth or components
/// - [`OpsError::WindowOutOfBounds`] if the window is not inside `dst`
pub fn render<A: AbortSignal + ?Sized>(
    curves: Option<&dyn CurveEvaluator>,
    dst: &mut ImageBuffer,
    src: Option<&ImageBuffer>,
    args: RenderArgs,
    abort: &A,
) -> OpsResult<RenderStatus> {
    trace!(window = %args.window, time = args.time, layout = %dst.layout(), "render");

    let builder = LutBuilder::new(curves)?.at_time(args.time);
    if let Some(src) = src {
        if src.layout() != dst.layout() {
            return Err(OpsError::LayoutMismatch {
                src: src.layout(),
                dst: dst.layout(),
            });
        }
    }
    let bounds = dst.bounds();
    if !bounds.contains_window(&args.window) {
        return Err(OpsError::WindowOutOfBounds {
            window: args.window,
            bounds,
        });
    }

    let RenderOptions { threads, blend } = args.options;
    let window = args.window;
    let status = match dst {
        ImageBuffer::U8(dst) => {
            let lut = builder.build::<u8>();
            let src = src.and_then(ImageBuffer::as_u8);
            process(dst, src, &IntegerKernel::new(&lut), window, threads, abort)?
        }
        ImageBuffer::U16(dst) => {
            let lut = builder.build::<u16>();
            let src = src.and_then(ImageBuffer::as_u16);
            process(dst, src, &IntegerKernel::new(&lut), window, threads, abort)?
        }
        ImageBuffer::F32(dst) => {
            let lut = builder.build::<f32>();
            let src = src.and_then(ImageBuffer::as_f32);
            process(dst, src, &FloatKernel::new(&lut, blend), window, threads, abort)?
        }
    };

    debug!(?status, "Render finished");
    Ok(status)
}
