//! Where and how results are written.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Fixed-width columns for humans.
    #[default]
    Table,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Write to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    pub fn open(&self) -> Result<Box<dyn Write>> {
        open_writer(self.output.as_deref())
    }
}

pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

/// Write `value` as one JSON line.
pub fn write_json_line<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    out.write_all(b"\n")?;
    Ok(())
}
