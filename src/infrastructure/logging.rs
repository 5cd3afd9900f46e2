//! Logging initialization for binary consumers of the library
//!
//! Console `tracing` subscriber with `RUST_LOG`-style filtering. The
//! library itself only emits events; installing a subscriber is the
//! consumer's choice.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Initialize console logging at `info` level (overridable via `RUST_LOG`).
pub fn init_logging() -> Result<()> {
    init_logging_with_filter("info")
}

/// Initialize console logging with a custom default filter directive.
///
/// `RUST_LOG`, when set, takes precedence over `default_filter`.
pub fn init_logging_with_filter(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| anyhow!("invalid log filter '{}': {}", default_filter, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
