//! Remote registry integration.
//!
//! The pipeline only ever consumes the [`SearchClient`] trait; the bundled
//! [`RegistryClient`] implements it over HTTP with session bootstrap and
//! bounded retry on throttling.

pub mod client;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;


pub use client::{RegistryClient, RegistryClientFactory, SearchClient, SearchClientFactory};
pub use config::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, RegistryConfig};
pub use error::{SearchError, SearchResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockFailure, MockSearchClient};
pub use model::{RawRecord, SearchEnvelope, SearchPage, SearchRequest};
