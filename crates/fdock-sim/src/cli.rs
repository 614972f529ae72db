use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fdock::DockOptions;
use tracing_subscriber::EnvFilter;

use crate::curve::{CurveArgs, run_curve};
use crate::error::Result;
use crate::options::load_config;
use crate::output::open_writer;
use crate::sweep::{SweepArgs, run_sweep};

#[derive(Debug, Parser)]
#[command(
    name = "fdock-sim",
    about = "Headless simulator for FrankenDock magnification and motion",
    version
)]
pub struct Cli {
    /// Log as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sweep the pointer across a dock and print per-frame sizes.
    Sweep(SweepArgs),

    /// Print the magnification curve.
    Curve(CurveArgs),

    /// Validate a JSON options file and print it normalised.
    #[command(name = "check-config")]
    CheckConfig(CheckConfigArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CheckConfigArgs {
    pub path: PathBuf,

    /// Write the normalised options here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Sweep(args) => run_sweep(args),
        Commands::Curve(args) => run_curve(args),
        Commands::CheckConfig(args) => run_check_config(&args),
    }
}

/// Install a global subscriber honouring `RUST_LOG`. A no-op if one is
/// already installed.
pub fn init_logging(json: bool) {
    if json {
        let _ = fdock_core::logging::init_json_logging();
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run_check_config(args: &CheckConfigArgs) -> Result<()> {
    let config = load_config(&args.path)?;
    let normalised = DockOptions::from(&config);
    tracing::info!(
        message = "sim.check_config",
        path = %args.path.display(),
        magnification = config.magnifier().is_active()
    );
    let mut out = open_writer(args.output.as_deref())?;
    serde_json::to_writer_pretty(&mut *out, &normalised)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_sweep_flags() {
        let cli = Cli::try_parse_from([
            "fdock-sim",
            "sweep",
            "--items",
            "7",
            "--orientation",
            "right",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Sweep(args) => {
                assert_eq!(args.items, 7);
                assert_eq!(
                    args.dock.orientation,
                    Some(crate::options::OrientationArg::Right)
                );
                assert_eq!(args.out.format, crate::output::Format::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn check_config_requires_path() {
        assert!(Cli::try_parse_from(["fdock-sim", "check-config"]).is_err());
    }
}
