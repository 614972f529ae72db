use std::path::PathBuf;

use fdock::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

/// Exit code for configuration problems (bad JSON, rejected values).
pub const EXIT_CONFIG: i32 = 2;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl SimError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigFile { .. } | Self::Config(_) => EXIT_CONFIG,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_use_config_exit_code() {
        let error = SimError::from(ConfigError::ScaleBelowOne { value: 0.5 });
        assert_eq!(error.exit_code(), EXIT_CONFIG);
        assert!(error.to_string().starts_with("invalid config:"));
    }

    #[test]
    fn invalid_constructor_wraps_message() {
        let error = SimError::invalid("fps must be positive");
        assert_eq!(error.exit_code(), 1);
        assert_eq!(error.to_string(), "invalid argument: fps must be positive");
    }
}
