//! Error types for `cyber-mcp-http`.

use crate::safety::sanitize_reqwest_error;
use thiserror::Error;

/// Failures raised by the request gateway.
///
/// The gateway never recovers from these itself; callers decide how to surface them.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Invalid base URL or endpoint.
    #[error("config error: {0}")]
    Config(String),

    /// Connection, DNS or TLS failure reported by the HTTP client.
    #[error("{0}")]
    Transport(String),

    /// The deadline elapsed before the response was fully received.
    #[error("request to {endpoint} was aborted: timed out after {timeout_ms}ms")]
    Timeout { endpoint: String, timeout_ms: u64 },

    /// The remote API answered with a non-success status.
    #[error("Failed to fetch {endpoint}: {status} {status_text}")]
    Status {
        endpoint: String,
        status: u16,
        status_text: String,
    },

    /// The success body was not valid JSON.
    #[error("invalid JSON from {endpoint}: {source}")]
    Parse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GatewayError {
    /// HTTP status carried by a `Status` failure.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(sanitize_reqwest_error(&value))
    }
}

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
