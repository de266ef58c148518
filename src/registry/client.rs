use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use super::config::RegistryConfig;
use super::error::{SearchError, SearchResult};
use super::model::{RawRecord, SearchEnvelope, SearchRequest};

/// Async search capability the pipeline consumes.
///
/// `search` takes `&mut self`: a client owns mutable session state and is
/// held exclusively by one worker for its lifetime.
pub trait SearchClient: Send {
    /// Queries the registry for records matching `query`.
    fn search(
        &mut self,
        query: &str,
    ) -> impl std::future::Future<Output = SearchResult<Vec<RawRecord>>> + Send;
}

/// Builds one [`SearchClient`] per pool worker.
pub trait SearchClientFactory: Send + Sync {
    /// Client type produced by this factory.
    type Client: SearchClient + 'static;

    /// Creates a fresh client with its own session.
    fn build(&self) -> impl std::future::Future<Output = SearchResult<Self::Client>> + Send;
}

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client for the registry, with session bootstrap and bounded retry.
pub struct RegistryClient {
    http: reqwest::Client,
    config: RegistryConfig,
    session_ready: bool,
}

impl std::fmt::Debug for RegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryClient")
            .field("base_url", &self.config.base_url)
            .field("session_ready", &self.session_ready)
            .finish()
    }
}

impl RegistryClient {
    /// Creates a client for the configured registry. No network traffic
    /// happens until the first search.
    pub fn new(config: RegistryConfig) -> SearchResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .default_headers(default_headers(&config))
            .build()
            .map_err(|e| SearchError::Transport {
                url: config.base_url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            config,
            session_ready: false,
        })
    }

    /// Fetches the landing page so the registry hands out session cookies.
    ///
    /// A failed bootstrap is logged but not fatal; the search itself decides
    /// whether the session is usable.
    async fn ensure_session(&mut self) {
        if self.session_ready {
            return;
        }

        debug!(url = %self.config.landing_url(), "bootstrapping registry session");
        match self.http.get(self.config.landing_url()).send().await {
            Ok(response) if response.status().is_success() => {
                self.session_ready = true;
            }
            Ok(response) => {
                warn!(status = %response.status(), "landing page returned non-success");
                self.session_ready = true;
            }
            Err(e) => {
                warn!(error = %e, "session bootstrap failed, continuing without it");
            }
        }
    }

    async fn search_once(&self, query: &str) -> SearchResult<Vec<RawRecord>> {
        let url = self.config.search_url();
        let body = SearchRequest {
            model: query,
            page: 1,
            page_size: self.config.page_size,
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| classify_request_error(e, &url, &self.config))?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(SearchError::RateLimited {
                    message: "HTTP 429".to_string(),
                });
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(SearchError::AuthExpired {
                    message: format!("HTTP {}", response.status()),
                });
            }
            status if !status.is_success() => {
                return Err(SearchError::Transport {
                    url,
                    message: format!("HTTP {status}"),
                });
            }
            _ => {}
        }

        let envelope: SearchEnvelope =
            response
                .json()
                .await
                .map_err(|e| SearchError::Malformed {
                    message: e.to_string(),
                })?;

        if envelope.code != 0 {
            return Err(SearchError::Malformed {
                message: format!("registry code {}: {}", envelope.code, envelope.msg),
            });
        }

        Ok(envelope.data.map(|page| page.records).unwrap_or_default())
    }
}

impl SearchClient for RegistryClient {
    async fn search(&mut self, query: &str) -> SearchResult<Vec<RawRecord>> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                // Linear backoff between attempts.
                tokio::time::sleep(Duration::from_secs_f64(1.5 * attempt as f64)).await;
            }

            self.ensure_session().await;

            match self.search_once(query).await {
                Ok(records) => {
                    debug!(query, count = records.len(), attempt, "registry search ok");
                    return Ok(records);
                }
                Err(e @ (SearchError::RateLimited { .. } | SearchError::AuthExpired { .. })) => {
                    warn!(query, attempt, error = %e, "retrying with a fresh session");
                    self.session_ready = false;
                    last_error = Some(e);
                }
                Err(e @ (SearchError::Timeout { .. } | SearchError::Transport { .. })) => {
                    warn!(query, attempt, error = %e, "retrying after transport failure");
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        // max_retries >= 0 means the loop body ran at least once, so an
        // error must have been recorded.
        Err(last_error.unwrap_or(SearchError::Transport {
            url: self.config.search_url(),
            message: "retries exhausted".to_string(),
        }))
    }
}

/// Factory producing [`RegistryClient`]s, one per worker.
#[derive(Debug, Clone, Default)]
pub struct RegistryClientFactory {
    config: RegistryConfig,
}

impl RegistryClientFactory {
    pub fn new(config: RegistryConfig) -> Self {
        Self { config }
    }
}

impl SearchClientFactory for RegistryClientFactory {
    type Client = RegistryClient;

    async fn build(&self) -> SearchResult<RegistryClient> {
        RegistryClient::new(self.config.clone())
    }
}

fn default_headers(config: &RegistryConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Accept",
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(
        "Accept-Language",
        HeaderValue::from_static("zh-CN,zh;q=0.9,en;q=0.8"),
    );
    headers.insert("tenant-id", HeaderValue::from_static("1"));
    headers.insert(
        "X-Requested-With",
        HeaderValue::from_static("XMLHttpRequest"),
    );
    if let Ok(referer) = HeaderValue::from_str(&config.landing_url()) {
        headers.insert("Referer", referer);
    }
    headers
}

fn classify_request_error(e: reqwest::Error, url: &str, config: &RegistryConfig) -> SearchError {
    if e.is_timeout() {
        SearchError::Timeout {
            seconds: config.timeout.as_secs_f64(),
        }
    } else {
        SearchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}
