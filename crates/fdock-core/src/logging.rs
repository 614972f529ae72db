#![forbid(unsafe_code)]

//! Structured logging hooks.
//!
//! With the `tracing` feature the usual `tracing` macros are re-exported so
//! downstream crates can log through `fdock_core::debug!` without naming the
//! `tracing` crate themselves. With `tracing-json` a JSON subscriber filtered
//! by `RUST_LOG` can be installed for production hosts.
//!
//! Without either feature this module is empty and every call site in the
//! workspace compiles away.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Default filter directive used when `RUST_LOG` is unset.
#[cfg(feature = "tracing-json")]
pub const DEFAULT_FILTER: &str = "fdock=info,fdock_core=info";

/// Install a global JSON subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed; the existing
/// one is left in place.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(false)
        .try_init()
        .is_ok()
}
