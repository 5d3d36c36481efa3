//! Structured logging infrastructure for the coordinator.
//!
//! This module provides centralized logging initialization with support
//! for structured JSON output and environment-based configuration.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` wins, otherwise `default_level`.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the logging system with human-readable output.
///
/// Log level can be configured via the `RUST_LOG` environment variable.
/// If not set, defaults to `default_level`.
///
/// # Example
/// ```no_run
/// use droneops_core::logging;
///
/// logging::init("info");
/// tracing::info!("Coordinator started");
/// ```
pub fn init(default_level: &str) {
    // Logs go to stderr so command output on stdout stays machine-readable.
    let _ = tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();
}

/// Initialize the logging system with JSON output for log aggregation.
///
/// # Example
/// ```no_run
/// use droneops_core::logging;
///
/// logging::init_json("info");
/// tracing::info!(workbook = "roster.json", "Roster loaded");
/// ```
pub fn init_json(default_level: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init();
}

/// Initialize from a [`LoggingConfig`].
pub fn init_from_config(config: &LoggingConfig) {
    if config.json {
        init_json(&config.level);
    } else {
        init(&config.level);
    }
}
