//! LUT dump command

use crate::DumpArgs;
use anyhow::{Result, bail};
use rgblut_lut::{CurveEvaluator, LutBuilder, LutEntry, RgbLut};
use std::fmt::Display;

pub fn run(args: DumpArgs) -> Result<()> {
    let curves = super::build_curves(&args.curves)?;
    let builder = LutBuilder::new(Some(&curves as &dyn CurveEvaluator))?.at_time(args.curves.time);
    let step = args.step.max(1);

    let mut out = String::new();
    match args.depth.to_lowercase().as_str() {
        "8" | "u8" => format_lut(&builder.build::<u8>(), step, &mut out),
        "16" | "u16" => format_lut(&builder.build::<u16>(), step, &mut out),
        "float" | "f32" | "32" => format_lut(&builder.build::<f32>(), step, &mut out),
        other => bail!("Unknown depth: {other} (expected 8, 16 or float)"),
    }
    print!("{out}");
    Ok(())
}

/// Appends `index r g b` lines for every `step`-th entry, plus the last one.
fn format_lut<T: LutEntry + Display>(lut: &RgbLut<T>, step: usize, out: &mut String) {
    let last = lut.size() - 1;
    out.extend(
        (0..lut.size())
            .step_by(step)
            .chain((last % step != 0).then_some(last))
            .map(|i| format!("{i} {} {} {}\n", lut.get(0, i), lut.get(1, i), lut.get(2, i))),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgblut_lut::{ConstantCurves, IdentityCurves};

    #[test]
    fn test_format_identity_u8() {
        let lut = LutBuilder::new(Some(&IdentityCurves as &dyn CurveEvaluator))
            .unwrap()
            .build::<u8>();
        let mut out = String::new();
        format_lut(&lut, 100, &mut out);
        assert_eq!(out, "0 0 0 0\n100 100 100 100\n200 200 200 200\n255 255 255 255\n");
    }

    #[test]
    fn test_format_float_step_one() {
        let lut = LutBuilder::new(Some(&ConstantCurves([0.5, 1.0, 0.0]) as &dyn CurveEvaluator))
            .unwrap()
            .build::<f32>();
        let mut out = String::new();
        format_lut(&lut, 1, &mut out);
        assert_eq!(out.lines().count(), 1000);
        assert_eq!(out.lines().next(), Some("0 0.5 1 0"));
    }

    #[test]
    fn test_format_appends() {
        let lut = LutBuilder::new(Some(&IdentityCurves as &dyn CurveEvaluator))
            .unwrap()
            .build::<u8>();
        let mut out = String::from("# header\n");
        format_lut(&lut, 255, &mut out);
        assert_eq!(out, "# header\n0 0 0 0\n255 255 255 255\n");
    }
}
