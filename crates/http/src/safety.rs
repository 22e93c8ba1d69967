//! URL validation and redaction for outbound requests.
//!
//! Request URLs carry caller-supplied query values (e.g. `clientId`), so anything that ends up in
//! logs or error messages goes through `redact_url` first.

use crate::error::GatewayError;
use url::Url;

/// Validate the configured base URL.
///
/// # Errors
///
/// Returns an error if the URL does not parse, uses a scheme other than `http(s)`, or has no
/// host.
pub fn check_base_url(base_url: &str) -> Result<Url, GatewayError> {
    let url = Url::parse(base_url)
        .map_err(|e| GatewayError::Config(format!("Invalid baseUrl '{base_url}': {e}")))?;

    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(GatewayError::Config(format!(
            "Invalid baseUrl '{base_url}': unsupported URL scheme '{scheme}'"
        )));
    }
    if url.host_str().is_none() {
        return Err(GatewayError::Config(format!(
            "Invalid baseUrl '{base_url}': missing URL host"
        )));
    }

    Ok(url)
}

#[must_use]
pub fn redact_url(url: &Url) -> String {
    let mut u = url.clone();
    // Best-effort: drop credentials + query + fragment.
    let _ = u.set_username("");
    let _ = u.set_password(None);
    u.set_query(None);
    u.set_fragment(None);
    u.to_string()
}

#[must_use]
pub fn sanitize_reqwest_error(e: &reqwest::Error) -> String {
    let mut msg = e.to_string();
    if let Some(u) = e.url() {
        msg = msg.replace(u.as_str(), &redact_url(u));
    }
    msg
}
