//! Logging setup for host programs.
//!
//! The filter comes from the first of:
//! 1. `RUST_LOG`
//! 2. `NDIMG_LOG`
//! 3. the `verbosity` of the render config

use ndimg_core::RenderConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable read after `RUST_LOG`.
pub const LOG_ENV: &str = "NDIMG_LOG";

/// Filter for `config`, honoring the environment first.
#[must_use]
pub fn env_filter(config: &RenderConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .or_else(|_| EnvFilter::try_new(config.log_level()))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs a stderr subscriber. Returns `false` if one was already set.
pub fn init_logging(config: &RenderConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
