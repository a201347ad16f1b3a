//! Client configuration.
//!
//! Loaded once at startup from the environment (and an optional `.env` file).
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DRIVETHRU_API_URL` | `http://localhost:8000` | Base URL of the ordering system |
//! | `DRIVETHRU_TIMEOUT_MS` | `30000` | Bounded wait for every API call |

use std::env;
use std::time::Duration;
use thiserror::Error;

pub const API_URL_VAR: &str = "DRIVETHRU_API_URL";
pub const TIMEOUT_VAR: &str = "DRIVETHRU_TIMEOUT_MS";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the ordering system, without a trailing slash.
    pub api_base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>, timeout: Duration) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self {
            api_base_url,
            timeout,
        }
    }

    /// Reads the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the timeout is set but is not a
    /// positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. `from_env` uses the process
    /// environment; tests pass a closure.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_ms = match lookup(TIMEOUT_VAR) {
            None => DEFAULT_TIMEOUT_MS,
            Some(raw) => parse_timeout(&raw)?,
        };

        Ok(Self::new(
            api_base_url.trim(),
            Duration::from_millis(timeout_ms),
        ))
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: TIMEOUT_VAR.to_string(),
        message,
    };

    let value: u64 = raw
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?;
    if value == 0 {
        return Err(invalid("must be greater than zero".to_string()));
    }
    Ok(value)
}
