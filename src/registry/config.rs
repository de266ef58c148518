use std::time::Duration;

use crate::constants::DEFAULT_PAGE_SIZE;

/// Default registry endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.energylabel.com.cn";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;

/// Default retry budget for throttled or expired-session responses.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Configuration for the HTTP registry client.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Registry base URL (no trailing slash).
    pub base_url: String,
    /// Records requested per search (page 1 only; the registry's paging
    /// metadata is unreliable and deeper pages are never fetched).
    pub page_size: u32,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retries after a `RateLimited` / `AuthExpired` / transport failure.
    pub max_retries: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl RegistryConfig {
    /// Config pointing at a different base URL, defaults elsewhere.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Search API path under the base URL.
    pub fn search_url(&self) -> String {
        format!(
            "{}/admin-api/gateway/productRegistration/productRegistrationList",
            self.base_url
        )
    }

    /// Landing page fetched to establish a session.
    pub fn landing_url(&self) -> String {
        format!("{}/historicalRecordQueryList", self.base_url)
    }
}
