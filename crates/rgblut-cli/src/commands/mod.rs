//! CLI command implementations

pub mod apply;
pub mod dump;

use crate::CurveArgs;
use anyhow::{Context, Result};
use rgblut_lut::{Channel, ControlPointCurve, RgbCurves};
use tracing::debug;

/// Builds the three channel curves; missing channels stay identity.
pub fn build_curves(args: &CurveArgs) -> Result<RgbCurves> {
    let mut curves = RgbCurves::default();
    let specs = [
        (Channel::Red, &args.red),
        (Channel::Green, &args.green),
        (Channel::Blue, &args.blue),
    ];
    for (channel, spec) in specs {
        if let Some(spec) = spec {
            *curves.channel_mut(channel) = spec
                .parse::<ControlPointCurve>()
                .with_context(|| format!("Invalid {channel:?} curve"))?;
        }
    }

    for _ in 0..args.subdivide {
        curves.subdivide_all();
    }
    debug!(
        red = curves.red.len(),
        green = curves.green.len(),
        blue = curves.blue.len(),
        "Curves ready"
    );
    Ok(curves)
}
