//! Logging setup for schema conversion.
//!
//! Conversion emits `tracing` events: `trace` per attribute, `debug` when an
//! attribute is rejected, and an `error` when a provider schema cannot be
//! converted. These helpers install a subscriber that writes to **stderr**,
//! since stdout of a provider process is reserved for the handshake line.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Controls log levels (e.g., `info`, `hemmer_provider_schema=trace`)
//!
//! # Examples
//!
//! ```bash
//! # Show every attribute as it is converted
//! RUST_LOG=hemmer_provider_schema=trace ./my-provider
//!
//! # Show only rejected schemas
//! RUST_LOG=hemmer_provider_schema=debug ./my-provider
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn try_init_with(default_level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(filter(default_level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .try_init()
}

/// Initialize the default logging subscriber.
///
/// Respects `RUST_LOG`, defaulting to `info`.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging() {
    init_logging_with_default("info");
}

/// Initialize logging with a custom default level.
///
/// Like [`init_logging`], but `default_level` is used if `RUST_LOG` is not set.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging_with_default(default_level: &str) {
    if let Err(err) = try_init_with(default_level) {
        panic!("failed to initialize logging: {}", err);
    }
}

/// Try to initialize logging, returning false if already initialized.
///
/// Useful in tests, where several cases may race to install a subscriber.
pub fn try_init_logging() -> bool {
    try_init_with("info").is_ok()
}
