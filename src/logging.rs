//! Tracing subscriber setup.

use crate::Config;
use anyhow::Result;
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to the configured file so output does not disturb the terminal UI.
pub fn init_file_logging(config: &Config) -> Result<()> {
    let log_file = File::create(config.log_file())?;
    // Don't fail if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr, keeping stdout for command output.
pub fn init_stderr_logging(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
