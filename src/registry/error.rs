use thiserror::Error;

#[derive(Debug, Error)]
/// Failures surfaced by a registry search.
pub enum SearchError {
    /// The request did not complete within the configured timeout.
    #[error("registry request timed out after {seconds:.1}s")]
    Timeout {
        /// Configured timeout in seconds.
        seconds: f64,
    },

    /// The registry throttled the caller (HTTP 429 or an equivalent body).
    #[error("registry rate limited the request: {message}")]
    RateLimited {
        /// Upstream message, if any.
        message: String,
    },

    /// The session or sign token is no longer accepted.
    #[error("registry session expired: {message}")]
    AuthExpired {
        /// Upstream message, if any.
        message: String,
    },

    /// Connection-level failure.
    #[error("transport error talking to '{url}': {message}")]
    Transport {
        /// Endpoint URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("malformed registry response: {message}")]
    Malformed {
        /// Parse error message.
        message: String,
    },
}

pub type SearchResult<T> = Result<T, SearchError>;
