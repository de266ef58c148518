//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Worker count could not be parsed as a number.
    #[error("failed to parse worker count '{value}': {source}")]
    WorkersParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Worker count must be at least 1.
    #[error("invalid worker count '{value}': must be at least 1")]
    InvalidWorkers { value: String },

    /// Interval string could not be parsed as seconds.
    #[error("failed to parse interval '{value}': {source}")]
    IntervalParseError {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Interval must be a finite, non-negative number of seconds.
    #[error("invalid interval '{value}': must be a finite number of seconds >= 0")]
    InvalidInterval { value: String },

    /// Timeout string could not be parsed as seconds.
    #[error("failed to parse timeout '{value}': {source}")]
    TimeoutParseError {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Timeout must be a positive, finite number of seconds.
    #[error("invalid timeout '{value}': must be a finite number of seconds > 0")]
    InvalidTimeout { value: String },

    /// Page size must be between 1 and 100.
    #[error("invalid page size '{value}': must be between 1 and 100")]
    InvalidPageSize { value: String },

    /// Registry URL is empty or not http(s).
    #[error("invalid registry URL '{value}': must start with http:// or https://")]
    InvalidRegistryUrl { value: String },
}
