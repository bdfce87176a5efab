//! rgblut - per-channel RGB curve LUT tool
//!
//! A small host around `rgblut-ops`: loads PNGs, builds curves from control
//! points given on the command line, renders, and writes PNGs.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rgblut_core::RenderWindow;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod io;

/// Each pass doubles the control point count.
const MAX_SUBDIVIDE: u32 = 16;

#[derive(Parser)]
#[command(name = "rgblut")]
#[command(author, version, about = "Apply per-channel RGB curves through lookup tables")]
#[command(long_about = "
Applies independent red, green and blue curves to an image. Each curve is a
list of position:value control points; unspecified channels are identity.

Examples:
  rgblut apply in.png -o out.png --red 0:0,0.5:0.7,1:1
  rgblut apply in.png -o out.png --blue 0:1,1:0 --float --blend legacy
  rgblut apply in.png -o out.png --green 0:0.2,1:1 --window 0,0,256,128
  rgblut dump --depth 8 --red 0:1,1:0 --step 32
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply curves to a PNG image
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Print the lookup table built from curves
    Dump(DumpArgs),
}

/// Curve definitions shared by all commands.
#[derive(Args, Clone, Default)]
struct CurveArgs {
    /// Red curve control points (pos:val,...)
    #[arg(long, value_name = "SPEC")]
    red: Option<String>,

    /// Green curve control points (pos:val,...)
    #[arg(long, value_name = "SPEC")]
    green: Option<String>,

    /// Blue curve control points (pos:val,...)
    #[arg(long, value_name = "SPEC")]
    blue: Option<String>,

    /// Subdivide every curve N times before rendering (0-16)
    #[arg(long, default_value = "0", value_name = "N", value_parser = clap::value_parser!(u32).range(0..=MAX_SUBDIVIDE as i64))]
    subdivide: u32,

    /// Time to sample curves at
    #[arg(long, default_value = "0")]
    time: f64,
}

#[derive(Args)]
struct ApplyArgs {
    /// Input PNG
    input: PathBuf,

    /// Output PNG
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    curves: CurveArgs,

    /// Process as normalized float instead of the file's integer depth
    #[arg(long)]
    float: bool,

    /// Float interpolation: linear, legacy (defaults to RGBLUT_BLEND or linear)
    #[arg(long)]
    blend: Option<String>,

    /// Render only this window (x1,y1,x2,y2); other pixels are copied
    #[arg(long, value_parser = parse_window, allow_hyphen_values = true)]
    window: Option<RenderWindow>,
}

#[derive(Args)]
struct DumpArgs {
    /// Table depth: 8, 16, float
    #[arg(short = 'd', long, default_value = "8")]
    depth: String,

    #[command(flatten)]
    curves: CurveArgs,

    /// Print every K-th entry
    #[arg(long, default_value = "1", value_name = "K")]
    step: usize,
}

/// Parses `x1,y1,x2,y2`.
fn parse_window(s: &str) -> std::result::Result<RenderWindow, String> {
    let parts: Vec<i32> = s
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| format!("invalid window '{s}': {e}"))?;
    match parts[..] {
        [x1, y1, x2, y2] => Ok(RenderWindow::new(x1, y1, x2, y2)),
        _ => Err(format!("window needs 4 values x1,y1,x2,y2, got '{s}'")),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info,rgblut_ops=debug,rgblut_lut=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Dump(args) => commands::dump::run(args),
    }
}
