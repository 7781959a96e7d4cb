//! # Logging
//!
//! Installs the `tracing` subscriber that receives the core's events.
//!
//! The core only emits events; where they end up is decided here. `RUST_LOG`
//! takes precedence over the configured level.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Builds the event filter from `RUST_LOG`, then `level`, then the default.
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Sends log output to stderr, keeping stdout for command output.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
