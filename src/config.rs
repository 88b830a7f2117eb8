//! API client configuration.
//!
//! The browser build bakes overrides in at compile time (`from_build_env`);
//! native tools read them at runtime (`from_env`). Both go through the same
//! lookup so parsing rules stay identical.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://agenda-backend.test/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 1000;

pub const BASE_URL_VAR: &str = "AGENDA_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "AGENDA_API_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

impl ApiConfig {
    /// Build config from runtime environment variables.
    ///
    /// Optional:
    /// - `AGENDA_API_BASE_URL`: default `http://agenda-backend.test/api`
    /// - `AGENDA_API_TIMEOUT_MS`: default 1000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the timeout is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build config from variables captured when the crate was compiled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the timeout is not a positive integer.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        const BUILD_BASE_URL: Option<&str> = option_env!("AGENDA_API_BASE_URL");
        const BUILD_TIMEOUT: Option<&str> = option_env!("AGENDA_API_TIMEOUT_MS");
        Self::from_lookup(|var| match var {
            BASE_URL_VAR => BUILD_BASE_URL.map(str::to_owned),
            TIMEOUT_VAR => BUILD_TIMEOUT.map(str::to_owned),
            _ => None,
        })
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the timeout is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_owned();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::InvalidValue { var: TIMEOUT_VAR, value: raw.clone() })?;
            config.timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }

    /// Request timeout in whole milliseconds, as reported in timeout errors.
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}
