//! Curve application command

use crate::{ApplyArgs, io};
use anyhow::{Context, Result, bail};
use rgblut_core::{BitDepth, NeverAbort};
use rgblut_lut::{Blend, CurveEvaluator};
use rgblut_ops::{RenderArgs, RenderOptions, RenderStatus, render};
use tracing::info;

pub fn run(args: ApplyArgs, verbose: u8) -> Result<()> {
    let curves = super::build_curves(&args.curves)?;
    let loaded = io::read(&args.input)?;
    let sixteen_bit = loaded.depth() == BitDepth::U16;
    let src = if args.float { io::to_float(&loaded) } else { loaded };

    let mut options = RenderOptions::from_env();
    if let Some(blend) = &args.blend {
        options.blend = blend.parse::<Blend>()?;
    }
    let window = args.window.unwrap_or_else(|| src.bounds());

    if verbose > 0 {
        println!(
            "Applying curves to {} ({}, {})",
            args.input.display(),
            src.layout(),
            window
        );
    }
    info!(input = %args.input.display(), layout = %src.layout(), window = %window, "Rendering");

    // pixels outside the window keep their source values
    let mut dst = src.clone();
    let render_args = RenderArgs::new(window)
        .with_time(args.curves.time)
        .with_options(options);
    let status = render(
        Some(&curves as &dyn CurveEvaluator),
        &mut dst,
        Some(&src),
        render_args,
        &NeverAbort,
    )
    .context("Render failed")?;
    if let RenderStatus::Aborted { rows_written } = status {
        bail!("render aborted after {rows_written} rows");
    }

    let out = io::from_float(&dst, sixteen_bit)?;
    io::write(&args.output, &out)?;

    if verbose > 0 {
        println!("Done.");
    }
    Ok(())
}
