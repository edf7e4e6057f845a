//! HTTP page fetcher.
//!
//! A thin wrapper over a pooled `reqwest` client. Timeouts bound every
//! request so a hung fetch cannot stall the batch; there is no retry layer.

use reqwest::Client;

use crate::config::{Config, site};
use crate::error::{FetchError, FetchResult};

/// Fetches raw page content from the proceedings site.
#[derive(Debug, Clone)]
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("neurips-harvest/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(site::MAX_KEEPALIVE)
            .pool_idle_timeout(site::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a page and return its body text.
    ///
    /// Non-success statuses are surfaced as [`FetchError::Status`] rather
    /// than silently swallowed; callers decide whether a failed page skips
    /// a year or just one paper.
    pub async fn fetch(&self, url: &str) -> FetchResult<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(status.as_u16(), url));
        }

        Ok(response.text().await?)
    }
}
