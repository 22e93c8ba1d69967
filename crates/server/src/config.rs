//! Startup configuration: defaults, optional config file, CLI/env overrides.

use crate::error::{Result, ServerError};
use cyber_mcp_http::GatewayConfig;
use cyber_mcp_http::safety::check_base_url;
use std::path::Path;

/// Values given on the command line or through the environment. They win over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub auth_key: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl ConfigOverrides {
    fn apply(&self, cfg: &mut GatewayConfig) {
        if let Some(v) = &self.base_url {
            cfg.base_url.clone_from(v);
        }
        if let Some(v) = &self.auth_key {
            cfg.auth_key.clone_from(v);
        }
        if let Some(v) = self.timeout_ms {
            cfg.timeout_ms = v;
        }
    }
}

/// Resolve the effective configuration.
///
/// Precedence, lowest first: built-in defaults, the config file at `path` (YAML or JSON),
/// `overrides`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the resulting configuration is
/// invalid.
pub fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<GatewayConfig> {
    let mut cfg = match path {
        Some(p) => read_config_file(p)?,
        None => GatewayConfig::default(),
    };
    overrides.apply(&mut cfg);
    validate(&cfg)?;
    Ok(cfg)
}

fn read_config_file(path: &Path) -> Result<GatewayConfig> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ServerError::Config(format!("read config {}: {e}", path.display())))?;
    if text.trim().is_empty() {
        return Ok(GatewayConfig::default());
    }
    serde_yaml::from_str(&text)
        .map_err(|e| ServerError::Config(format!("parse config {}: {e}", path.display())))
}

/// Check values that typed deserialization cannot.
///
/// # Errors
///
/// Returns an error if `baseUrl` is not an `http(s)` URL or `timeoutMs` is zero.
pub fn validate(cfg: &GatewayConfig) -> Result<()> {
    check_base_url(&cfg.base_url).map_err(|e| ServerError::Config(e.to_string()))?;
    if cfg.timeout_ms == 0 {
        return Err(ServerError::Config(
            "timeoutMs must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
