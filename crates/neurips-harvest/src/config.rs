//! Configuration for the harvester.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::executor::Executor;

/// Source site constants.
pub mod site {
    use std::time::Duration;

    /// Root of the NeurIPS proceedings site.
    pub const BASE_URL: &str = "https://papers.nips.cc";

    /// First year of the conference.
    pub const FOUNDING_YEAR: i32 = 1987;

    /// Default dataset file.
    pub const DATASET_FILE: &str = "neurips.json";

    /// Request timeout (listing pages for recent years are large).
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum in-flight detail-page requests per year.
    pub const DETAIL_CONCURRENCY: usize = 8;

    /// Maximum keepalive connections to the source host.
    pub const MAX_KEEPALIVE: usize = 4;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Harvester configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the proceedings site.
    pub base_url: Url,

    /// Path of the persisted dataset.
    pub dataset_path: PathBuf,

    /// First valid conference year.
    pub founding_year: i32,

    /// Maximum in-flight detail-page requests per year.
    pub detail_concurrency: usize,

    /// Fetch detail pages one at a time instead of concurrently.
    pub sequential: bool,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a test configuration pointing at a mock server.
    ///
    /// # Panics
    ///
    /// Panics if `base_url` is not a valid URL.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: Url::parse(base_url).expect("valid mock server url"),
            dataset_path: PathBuf::from(site::DATASET_FILE),
            founding_year: site::FOUNDING_YEAR,
            detail_concurrency: 4,
            sequential: false,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// The detail-page executor selected by this configuration.
    #[must_use]
    pub fn executor(&self) -> Executor {
        if self.sequential {
            Executor::Sequential
        } else {
            Executor::buffered(self.detail_concurrency)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(site::BASE_URL).expect("valid base url"),
            dataset_path: PathBuf::from(site::DATASET_FILE),
            founding_year: site::FOUNDING_YEAR,
            detail_concurrency: site::DETAIL_CONCURRENCY,
            sequential: false,
            request_timeout: site::REQUEST_TIMEOUT,
            connect_timeout: site::CONNECT_TIMEOUT,
        }
    }
}
