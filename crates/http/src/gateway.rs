//! The shared GET helper used by every tool.
//!
//! One call is one attempt: build the URL, attach headers, send under a deadline, normalize the
//! outcome. Nothing is cached or retried.

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::safety::{check_base_url, redact_url};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

/// Header carrying the static API key.
pub const AUTH_KEY_HEADER: &str = "AUTH_KEY";

const JSON_MIME_TYPE: &str = "application/json";

#[derive(Clone)]
pub struct CyberGateway {
    inner: Arc<CyberGatewayInner>,
}

struct CyberGatewayInner {
    config: GatewayConfig,
    base_url: String,
    client: Client,
}

impl CyberGateway {
    /// Build a gateway from static settings.
    ///
    /// The resulting instance is immutable and safe to share across tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid, the timeout is zero, or the HTTP client
    /// cannot be built.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        check_base_url(&config.base_url)?;
        if config.timeout_ms == 0 {
            return Err(GatewayError::Config(
                "timeoutMs must be greater than 0".to_string(),
            ));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| GatewayError::Config(format!("failed to build HTTP client: {e}")))?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            inner: Arc::new(CyberGatewayInner {
                config,
                base_url,
                client,
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.inner.config
    }

    /// GET `<baseUrl><endpoint>?<params>` and parse the body as JSON.
    ///
    /// `params` are appended as query parameters in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the URL cannot be built
    /// - the request fails in transport
    /// - the deadline elapses first (the in-flight request is dropped)
    /// - the status is not a success (the body is not read)
    /// - the success body is not valid JSON
    pub async fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = build_url(&self.inner.base_url, endpoint, params)?;
        let target = redact_url(&url);
        let timeout = self.inner.config.timeout();
        let started = Instant::now();

        // Dropping the inner future on expiry aborts the request and releases its connection.
        let outcome = tokio::time::timeout(timeout, self.fetch(endpoint, url)).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(Ok(body)) => {
                debug!(endpoint, url = %target, elapsed_ms, "remote API call succeeded");
                Ok(body)
            }
            Ok(Err(e)) => {
                warn!(endpoint, url = %target, elapsed_ms, error = %e, "remote API call failed");
                Err(e)
            }
            Err(_) => {
                warn!(
                    endpoint,
                    url = %target,
                    timeout_ms = self.inner.config.timeout_ms,
                    "remote API call timed out"
                );
                Err(GatewayError::Timeout {
                    endpoint: endpoint.to_string(),
                    timeout_ms: self.inner.config.timeout_ms,
                })
            }
        }
    }

    async fn fetch(&self, endpoint: &str, url: Url) -> Result<Value> {
        let mut request = self
            .inner
            .client
            .get(url)
            .header(CONTENT_TYPE, JSON_MIME_TYPE);
        if let Some(key) = self.inner.config.auth_header_value() {
            request = request.header(AUTH_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "remote API responded");

        if !status.is_success() {
            return Err(GatewayError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| GatewayError::Parse {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

fn build_url(base_url: &str, endpoint: &str, params: &[(&str, &str)]) -> Result<Url> {
    let url = if endpoint.starts_with('/') {
        format!("{base_url}{endpoint}")
    } else {
        format!("{base_url}/{endpoint}")
    };
    let mut url = Url::parse(&url)
        .map_err(|e| GatewayError::Config(format!("Invalid URL for endpoint '{endpoint}': {e}")))?;

    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}
