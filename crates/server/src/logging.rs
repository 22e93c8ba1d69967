//! Log output setup.
//!
//! Logs always go to stderr: with the stdio transport, stdout carries MCP messages.

use crate::error::{Result, ServerError};
use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Install the global subscriber. `RUST_LOG`, when set, wins over `level`.
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter directive or a global subscriber is
/// already installed.
pub fn init_tracing(level: &str, format: LogFormat) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| ServerError::Config(format!("invalid log level '{level}': {e}")))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Text => builder.with_ansi(false).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| ServerError::Startup(format!("failed to install tracing subscriber: {e}")))
}
