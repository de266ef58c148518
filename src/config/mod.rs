//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `GRADECHECK_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::time::Duration;

use crate::constants::{DEFAULT_MIN_INTERVAL_SECS, DEFAULT_PAGE_SIZE, DEFAULT_WORKERS};
use crate::registry::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, RegistryConfig};
use crate::resolve::BatchOptions;

/// Pipeline configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `GRADECHECK_*` overrides on top of
/// defaults, then [`Config::batch_options`] and [`Config::registry_config`]
/// to hand the settings to the batch runner and the HTTP client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Worker pool size. Default: `3`.
    pub workers: usize,

    /// Minimum seconds between one worker's registry calls. Default: `2.0`.
    pub min_interval_secs: f64,

    /// Registry base URL. Default: `https://www.energylabel.com.cn`.
    pub registry_url: String,

    /// Per-request timeout in seconds. Default: `10.0`.
    pub timeout_secs: f64,

    /// Records requested per search. Default: `10`.
    pub page_size: u32,

    /// Retry budget for throttled or expired-session responses. Default: `2`.
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            min_interval_secs: DEFAULT_MIN_INTERVAL_SECS,
            registry_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl Config {
    const ENV_WORKERS: &'static str = "GRADECHECK_WORKERS";
    const ENV_MIN_INTERVAL: &'static str = "GRADECHECK_MIN_INTERVAL_SECS";
    const ENV_REGISTRY_URL: &'static str = "GRADECHECK_REGISTRY_URL";
    const ENV_TIMEOUT: &'static str = "GRADECHECK_TIMEOUT_SECS";
    const ENV_PAGE_SIZE: &'static str = "GRADECHECK_PAGE_SIZE";
    const ENV_MAX_RETRIES: &'static str = "GRADECHECK_MAX_RETRIES";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let workers = Self::parse_workers_from_env(defaults.workers)?;
        let min_interval_secs = Self::parse_interval_from_env(defaults.min_interval_secs)?;
        let registry_url = Self::parse_string_from_env(Self::ENV_REGISTRY_URL, defaults.registry_url);
        let timeout_secs = Self::parse_timeout_from_env(defaults.timeout_secs)?;
        let page_size = Self::parse_u32_from_env(Self::ENV_PAGE_SIZE, defaults.page_size);
        let max_retries = Self::parse_u32_from_env(Self::ENV_MAX_RETRIES, defaults.max_retries);

        let config = Self {
            workers,
            min_interval_secs,
            registry_url,
            timeout_secs,
            page_size,
            max_retries,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::InvalidWorkers {
                value: self.workers.to_string(),
            });
        }
        if !self.min_interval_secs.is_finite() || self.min_interval_secs < 0.0 {
            return Err(ConfigError::InvalidInterval {
                value: self.min_interval_secs.to_string(),
            });
        }
        if !self.timeout_secs.is_finite() || self.timeout_secs <= 0.0 {
            return Err(ConfigError::InvalidTimeout {
                value: self.timeout_secs.to_string(),
            });
        }
        if self.page_size == 0 || self.page_size > 100 {
            return Err(ConfigError::InvalidPageSize {
                value: self.page_size.to_string(),
            });
        }
        if !self.registry_url.starts_with("http://") && !self.registry_url.starts_with("https://") {
            return Err(ConfigError::InvalidRegistryUrl {
                value: self.registry_url.clone(),
            });
        }
        Ok(())
    }

    /// Batch-runner options derived from this configuration.
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            workers: self.workers,
            min_interval: Duration::from_secs_f64(self.min_interval_secs),
            ..Default::default()
        }
    }

    /// HTTP client configuration derived from this configuration.
    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            base_url: self.registry_url.trim_end_matches('/').to_string(),
            page_size: self.page_size,
            timeout: Duration::from_secs_f64(self.timeout_secs),
            max_retries: self.max_retries,
        }
    }

    fn parse_workers_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_WORKERS) {
            Ok(value) => {
                let workers: usize =
                    value.parse().map_err(|e| ConfigError::WorkersParseError {
                        value: value.clone(),
                        source: e,
                    })?;

                if workers == 0 {
                    return Err(ConfigError::InvalidWorkers { value });
                }

                Ok(workers)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_interval_from_env(default: f64) -> Result<f64, ConfigError> {
        match env::var(Self::ENV_MIN_INTERVAL) {
            Ok(value) => {
                let secs: f64 = value.parse().map_err(|e| ConfigError::IntervalParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if !secs.is_finite() || secs < 0.0 {
                    return Err(ConfigError::InvalidInterval { value });
                }

                Ok(secs)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_timeout_from_env(default: f64) -> Result<f64, ConfigError> {
        match env::var(Self::ENV_TIMEOUT) {
            Ok(value) => {
                let secs: f64 = value.parse().map_err(|e| ConfigError::TimeoutParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if !secs.is_finite() || secs <= 0.0 {
                    return Err(ConfigError::InvalidTimeout { value });
                }

                Ok(secs)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_u32_from_env(var_name: &str, default: u32) -> u32 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
