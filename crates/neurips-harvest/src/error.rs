//! Error types for the harvester.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Recoverable conditions (a failed detail fetch, missing
//! abstract markup) are converted to empty values at the point of detection
//! and never surface through these types.

/// Errors from the page-fetch layer.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// HTTP transport error (connection, DNS, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status.
    #[error("unexpected status {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },
}

impl FetchError {
    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status { status, url: url.into() }
    }

    /// Returns true if this error was a request timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

/// Errors from year harvesting.
#[derive(thiserror::Error, Debug)]
pub enum HarvestError {
    /// Requested year predates the first conference.
    #[error("year {year} predates the first conference ({founding})")]
    InvalidYear {
        /// Requested year.
        year: i32,
        /// First valid conference year.
        founding: i32,
    },
}

/// Errors from the dataset store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Dataset file could not be read or written.
    #[error("failed to access dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file contents are not a valid paper array.
    #[error("malformed dataset file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
