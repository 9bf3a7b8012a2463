/// Error types for the API module
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while talking to the droplets API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, TLS, connection reset, client setup)
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// A single page did not answer within the per-page budget
    #[error("Request for page {page} timed out after {}s", .timeout.as_secs())]
    Timeout {
        page: u32,
        timeout: Duration,
    },

    /// The API answered with a non-success status
    #[error("API returned HTTP {status}: {message}")]
    Status {
        status: u16,
        message: String,
    },

    /// The response body was not a droplet page
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Pagination links could not be followed
    #[error("Invalid pagination link: {0}")]
    Pagination(String),
}
