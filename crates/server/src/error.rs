//! Error types for the MCP server.

use cyber_mcp_http::GatewayError;
use thiserror::Error;

/// Main error type for the server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration errors (invalid JSON/YAML, bad values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Startup errors (listener or transport failed to start)
    #[error("Startup error: {0}")]
    Startup(String),

    /// Request gateway construction errors
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML/JSON config parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
