//! HTTP helpers shared by the catalog clients

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::CatalogFailure;
use url::Url;

use crate::error::{TransferError, TransferResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the HTTP client used for every catalog call
pub fn build_http_client() -> TransferResult<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(format!("playlist-transfer/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| TransferError::ConfigError {
            message: format!("failed to build HTTP client: {e}"),
        })
}

/// Parse and validate a service base URL
pub fn parse_base_url(service: &str, base: &str) -> TransferResult<Url> {
    let url = Url::parse(base).map_err(|e| TransferError::ConfigError {
        message: format!("invalid {service} API base URL {base:?}: {e}"),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(TransferError::ConfigError {
            message: format!("{service} API base URL must be http(s): {base:?}"),
        });
    }

    Ok(url)
}

/// Append path segments to a base URL, percent-encoding each segment
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, CatalogFailure> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| CatalogFailure::InvalidResponse(format!("cannot extend base URL {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Map a transport error
pub fn network_failure(error: reqwest::Error) -> CatalogFailure {
    CatalogFailure::NetworkError(error.to_string())
}

/// Turn a non-success response into a failure, passing successes through
pub async fn check_status(response: Response) -> Result<Response, CatalogFailure> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CatalogFailure::from_status(status.as_u16(), body.trim()))
}

/// Check status and decode a JSON body
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, CatalogFailure> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| CatalogFailure::InvalidResponse(format!("failed to parse response: {e}")))
}
