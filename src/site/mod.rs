// src/site/mod.rs
pub mod client;

use crate::utils::error::FetchError;
use reqwest::Url;
use std::time::Duration;

/// The GNU project's list of endorsed free GNU/Linux distributions.
pub const DEFAULT_PAGE_URL: &str = "https://www.gnu.org/distros/free-distros.html";

const USER_AGENT: &str = concat!("free_distros/", env!("CARGO_PKG_VERSION"));

/// Where to fetch the page from and how root-relative links on it resolve.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub page_url: Url,
    /// `scheme://host[:port]` of `page_url`, without a trailing slash.
    pub origin: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl SiteConfig {
    /// Validates `page_url` and derives the origin used to absolutize `/...` links.
    pub fn from_page_url(page_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let url = Url::parse(page_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", page_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "{}: only http and https pages can be fetched",
                page_url
            )));
        }

        let origin = url.origin().ascii_serialization();
        tracing::debug!("Page {} resolves relative links against {}", url, origin);

        Ok(Self {
            page_url: url,
            origin,
            user_agent: USER_AGENT.to_string(),
            timeout,
        })
    }
}
