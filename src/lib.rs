//! Gradecheck library crate.
//!
//! Reconciles locally declared energy-efficiency grades against the public
//! registration registry: normalize a free-text product identifier, search
//! the registry, pick the best-matching record, and decide whether the
//! declared grade agrees with the registered one.
//!
//! # Public API Surface
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`] - Environment-backed configuration
//! - [`Query`], [`Resolution`], [`Verdict`] - Batch input and output
//! - [`resolve_batch`], [`resolve_batch_with_cancel`] - Batch entry points
//!
//! ## Matching Internals
//! - [`normalize`] - Identifier canonicalization
//! - [`CandidateRecord`], [`dedupe`] - Registry record handling
//! - [`score_candidate`], [`best_match`], [`similarity`] - Scoring
//! - [`is_relevant`] - Post-decision relevance re-validation
//!
//! ## Registry Access
//! - [`SearchClient`], [`SearchClientFactory`] - Client abstraction
//! - [`RegistryClient`], [`RegistryConfig`] - Bundled HTTP implementation
//!
//! ## Test/Mock Support
//! A scriptable [`MockSearchClient`] is available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod candidate;
pub mod config;
pub mod constants;
pub mod normalize;
pub mod registry;
pub mod resolve;
pub mod scoring;
pub mod verdict;
pub mod vocab;

pub use candidate::{CandidateRecord, Grade, dedupe, normalize_grade};
pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_MIN_INTERVAL_SECS, DEFAULT_PAGE_SIZE, DEFAULT_WORKERS, LOW_CONFIDENCE_THRESHOLD,
    SCORE_MAX, aggregate_rate,
};
pub use normalize::{cjk_part, cjk_ratio, is_cjk, normalize};
pub use registry::{
    DEFAULT_BASE_URL, RawRecord, RegistryClient, RegistryClientFactory, RegistryConfig,
    SearchClient, SearchClientFactory, SearchError, SearchResult,
};
#[cfg(any(test, feature = "mock"))]
pub use registry::{MockFailure, MockSearchClient};
pub use resolve::{
    BatchOptions, BatchResult, BatchStats, Query, Resolution, ResolutionState, resolve_batch,
    resolve_batch_with_cancel,
};
pub use scoring::{
    BestMatch, ScoredCandidate, best_match, brands_equivalent, extract_brand, rank,
    score_candidate, similarity,
};
pub use verdict::{Verdict, decide, is_relevant};
pub use vocab::{AliasGroup, BrandTier, Category, Vocabulary};
