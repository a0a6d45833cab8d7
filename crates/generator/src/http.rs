//! Shared HTTP plumbing for the provider clients.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shotcraft_core::{Error, Result};
use std::time::Duration;

/// Longest slice of an error body carried into an error message.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Build a client with the shotcraft user agent and the given timeout.
pub(crate) fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(concat!("shotcraft/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {e}")))
}

/// Send `request` and decode a successful JSON response.
///
/// Transport failures, non-2xx statuses and undecodable bodies all become
/// [`Error::Provider`] errors attributed to `provider`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    provider: &str,
    request: RequestBuilder,
) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| Error::provider(provider, format!("Request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::provider(
            provider,
            format!("HTTP {status}: {}", truncate(body.trim())),
        ));
    }

    response
        .json()
        .await
        .map_err(|e| Error::provider(provider, format!("Failed to parse response: {e}")))
}

/// Join `base` and `path` with exactly one slash.
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn truncate(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        body.to_string()
    } else {
        let mut short: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        short.push_str("...");
        short
    }
}
