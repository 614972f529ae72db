//! Dock configuration for simulator runs: an optional JSON file plus
//! command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use fdock::{DockConfig, DockOptions, DockSize, Orientation};

use crate::error::{Result, SimError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrientationArg {
    Bottom,
    Left,
    Right,
}

impl From<OrientationArg> for Orientation {
    fn from(value: OrientationArg) -> Self {
        match value {
            OrientationArg::Bottom => Self::Bottom,
            OrientationArg::Left => Self::Left,
            OrientationArg::Right => Self::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SizeArg {
    Sm,
    Md,
    Lg,
}

impl From<SizeArg> for DockSize {
    fn from(value: SizeArg) -> Self {
        match value {
            SizeArg::Sm => Self::Sm,
            SizeArg::Md => Self::Md,
            SizeArg::Lg => Self::Lg,
        }
    }
}

/// Flags shared by every subcommand that builds a dock.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// JSON options file (camelCase keys, all optional).
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub orientation: Option<OrientationArg>,

    #[arg(long, value_enum)]
    pub size: Option<SizeArg>,

    /// Peak size multiplier.
    #[arg(long)]
    pub scale: Option<f64>,

    /// Falloff radius in pixels.
    #[arg(long)]
    pub range: Option<f64>,

    /// Turn magnification off.
    #[arg(long)]
    pub no_magnification: bool,
}

impl ConfigArgs {
    /// Load the file (if any) and apply overrides on top.
    pub fn resolve(&self) -> Result<DockConfig> {
        let options = match &self.config {
            Some(path) => read_options(path)?,
            None => DockOptions::default(),
        };
        let mut config = DockConfig::try_from(options)?;
        if let Some(orientation) = self.orientation {
            config = config.with_orientation(orientation.into());
        }
        if let Some(size) = self.size {
            config = config.with_size(size.into());
        }
        if let Some(scale) = self.scale {
            if !scale.is_finite() {
                return Err(SimError::invalid(format!("--scale must be finite, got {scale}")));
            }
            config = config.with_scale(scale);
        }
        if let Some(range) = self.range {
            config = config.with_range(range);
        }
        if self.no_magnification {
            config = config.with_magnification(false);
        }
        Ok(config)
    }
}

/// Parse a JSON options file.
pub fn read_options(path: &Path) -> Result<DockOptions> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| SimError::ConfigFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse and validate a JSON options file.
pub fn load_config(path: &Path) -> Result<DockConfig> {
    Ok(DockConfig::try_from(read_options(path)?)?)
}
