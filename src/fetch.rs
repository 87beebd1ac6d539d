use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared HTTP client for all hall fetches.
pub fn client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("failed to build HTTP client")
}

/// Fetch one menu page and return its full body. No retries here: a failed
/// fetch is fatal for that hall's run and leaves the other halls alone.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    info!("Fetching {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request failed: {}", url))?
        .error_for_status()
        .with_context(|| format!("bad status from {}", url))?;
    response
        .text()
        .await
        .with_context(|| format!("failed to read body from {}", url))
}
