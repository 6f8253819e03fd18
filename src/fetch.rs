//! HTTP client construction and page fetching.
//!
//! A single [`reqwest::Client`] is built at startup and reused for every
//! listing and detail request, so connection pooling applies across the
//! whole run. Non-2xx statuses are turned into errors here so callers only
//! ever see a body they can parse.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::error::ScrapeError;

/// User agent advertised on every request.
const USER_AGENT: &str = concat!("cardfeed/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client with a per-request timeout.
pub fn build_client(timeout_secs: u64) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()
}

/// Fetch a page and return its body.
///
/// HTTP error statuses (4xx/5xx) are reported as [`ScrapeError::Request`]
/// rather than handed back as bodies.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched page");
    Ok(body)
}
