// src/site/client.rs
use crate::site::SiteConfig;
use crate::utils::error::FetchError;
use reqwest::header;

/// Creates a reqwest client with the configured User-Agent and timeout.
fn build_client(config: &SiteConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.timeout)
        .build()
}

/// Downloads the distribution list page and returns its HTML.
/// A single attempt is made; any non-2xx status is an error.
pub async fn fetch_page(config: &SiteConfig) -> Result<String, FetchError> {
    let client = build_client(config)?;

    tracing::info!("Downloading page from: {}", config.page_url);
    tracing::debug!("Using User-Agent: {}", config.user_agent);

    let response = client
        .get(config.page_url.clone())
        .header(header::ACCEPT, "text/html,application/xhtml+xml,*/*")
        .send()
        .await?; // Propagates reqwest::Error as FetchError::Network

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("Received {} for URL: {}", status, config.page_url);
        return Err(FetchError::Http(status));
    }

    let body = response.text().await?;
    tracing::info!("Downloaded {} bytes from {}", body.len(), config.page_url);

    Ok(body)
}
