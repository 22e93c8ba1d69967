//! Connection settings for the remote API.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL of the public demo deployment.
pub const DEFAULT_BASE_URL: &str = "https://demo-api.cyber-i.com";

/// Placeholder key accepted by the demo deployment.
pub const DEFAULT_AUTH_KEY: &str = "19295064DEBE4954B259E16A49D2F15711540431";

pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Settings supplied once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GatewayConfig {
    /// API base URL, e.g. `https://demo-api.cyber-i.com`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value for the `AUTH_KEY` request header. Empty disables the header.
    #[serde(default = "default_auth_key")]
    pub auth_key: String,

    /// Per-request deadline in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_key: default_auth_key(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl GatewayConfig {
    /// The auth key to send, or `None` when the header should be omitted.
    #[must_use]
    pub fn auth_header_value(&self) -> Option<&str> {
        Some(self.auth_key.as_str()).filter(|k| !k.is_empty())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_auth_key() -> String {
    DEFAULT_AUTH_KEY.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
