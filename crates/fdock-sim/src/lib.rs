#![forbid(unsafe_code)]

pub mod cli;
pub mod curve;
pub mod error;
pub mod options;
pub mod output;
pub mod sweep;

pub use cli::run_from_env;
pub use error::{Result, SimError};
