//! `curve`: tabulate the magnification curve.

use std::io::Write;

use clap::Args;
use fdock::Magnifier;
use serde::Serialize;

use crate::error::{Result, SimError};
use crate::options::ConfigArgs;
use crate::output::{Format, OutputArgs, write_json_line};

#[derive(Debug, Clone, Args)]
pub struct CurveArgs {
    #[command(flatten)]
    pub dock: ConfigArgs,

    /// Distance between samples in pixels.
    #[arg(long, default_value_t = 10.0)]
    pub step: f64,

    /// Sample out to this distance on each side. Defaults to 1.2 x range.
    #[arg(long)]
    pub extent: Option<f64>,

    #[command(flatten)]
    pub out: OutputArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub distance: f64,
    pub size: f64,
}

/// Upper bound on the number of sampled points.
pub const MAX_POINTS: usize = 100_000;

/// Sample `magnifier` at `-extent, -extent + step, ..., extent`.
///
/// Fails when that would produce more than [`MAX_POINTS`] points.
pub fn sample(magnifier: &Magnifier, step: f64, extent: f64) -> Result<Vec<CurvePoint>> {
    let count = (2.0 * extent / step).floor();
    if !count.is_finite() || count >= MAX_POINTS as f64 {
        return Err(SimError::invalid(format!(
            "--step {step} over --extent {extent} needs more than {MAX_POINTS} points"
        )));
    }
    let points = (0..=count as usize)
        .map(|i| {
            let distance = -extent + step * i as f64;
            CurvePoint {
                distance,
                size: magnifier.target(distance),
            }
        })
        .collect();
    Ok(points)
}

pub fn run_curve(args: CurveArgs) -> Result<()> {
    if !(args.step.is_finite() && args.step > 0.0) {
        return Err(SimError::invalid(format!(
            "--step must be a positive number, got {}",
            args.step
        )));
    }
    let config = args.dock.resolve()?;
    let magnifier = config.magnifier();
    let extent = match args.extent {
        Some(e) if e.is_finite() && e >= 0.0 => e,
        Some(e) => {
            return Err(SimError::invalid(format!(
                "--extent must be a non-negative number, got {e}"
            )));
        }
        None if magnifier.range() > 0.0 => magnifier.range() * 1.2,
        None => config.base_size() * 2.0,
    };
    let points = sample(&magnifier, args.step, extent)?;
    tracing::debug!(
        message = "sim.curve",
        points = points.len(),
        base = magnifier.base(),
        peak = magnifier.peak()
    );

    let mut out = args.out.open()?;
    match args.out.format {
        Format::Table => {
            writeln!(out, "{:>10}  {:>8}", "distance", "size")?;
            for p in &points {
                writeln!(out, "{:>10.1}  {:>8.2}", p.distance, p.size)?;
            }
        }
        Format::Json => {
            for p in &points {
                write_json_line(&mut *out, p)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
