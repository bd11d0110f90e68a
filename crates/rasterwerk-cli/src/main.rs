// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rasterwerk — Fixture Frame Generator
//
// Entry point. Initialises logging, resolves the run configuration from CLI
// arguments (and an optional JSON config file), and runs the pipeline.
// Invoked with no arguments it reproduces the historical behaviour: read
// `space_invaders.png`, threshold at 80, write a 244x256 frame to
// `output.png`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use rasterwerk_core::config::FrameConfig;
use rasterwerk_core::error::Result;
use rasterwerk_core::types::FrameResolution;
use rasterwerk_frame::FixtureGenerator;

/// Generate a black-and-white fixture frame at the classic 244x256 cabinet
/// resolution.
#[derive(Debug, Parser)]
#[command(name = "rasterwerk", version, about)]
struct Args {
    /// Source image to binarize [default: space_invaders.png]
    input: Option<PathBuf>,

    /// Output file, PNG or BMP; overwritten if present [default: output.png]
    output: Option<PathBuf>,

    /// Brightness threshold (1-255): a pixel becomes white when any of its
    /// channels is at or above this value [default: 80]
    #[arg(long)]
    threshold: Option<u8>,

    /// Target frame width in pixels [default: 244]
    #[arg(long)]
    width: Option<u32>,

    /// Target frame height in pixels [default: 256]
    #[arg(long)]
    height: Option<u32>,

    /// JSON config file; explicit flags take precedence over its values
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "fixture generation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args)?;
    tracing::info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        threshold = config.threshold,
        "Rasterwerk starting"
    );
    FixtureGenerator::new(config)?.run()
}

/// Merge the optional config file with CLI arguments.
///
/// Precedence: explicit flag > config file value > built-in default.
fn resolve_config(args: &Args) -> Result<FrameConfig> {
    let base = match &args.config {
        Some(path) => FrameConfig::load(path)?,
        None => FrameConfig::default(),
    };

    let resolution = match (args.width, args.height) {
        (None, None) => base.resolution,
        (width, height) => {
            let (base_w, base_h) = base.resolution.dimensions();
            FrameResolution::Custom {
                width: width.unwrap_or(base_w),
                height: height.unwrap_or(base_h),
            }
        }
    };

    Ok(FrameConfig {
        input_path: args.input.clone().unwrap_or(base.input_path),
        output_path: args.output.clone().unwrap_or(base.output_path),
        threshold: args.threshold.unwrap_or(base.threshold),
        resolution,
    })
}
