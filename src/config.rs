use std::time::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use crate::constants::{DEFAULT_API_URL, DEFAULT_POLL_INTERVAL_MS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid simulation base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("base URL {0} cannot carry a path")]
    CannotBeABase(String),
    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,
    #[error("failed to parse client configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for a [`SimulationClient`](crate::client::SimulationClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub poll_interval_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load settings from JSON; missing fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// The poll interval, refusing zero
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPollInterval`] for a zero interval
    pub fn checked_poll_interval(&self) -> Result<Duration, ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(self.poll_interval())
    }

    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL that can carry a path
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(self.base_url.clone()));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.poll_interval(), Duration::from_millis(1500));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ClientConfig::from_json_str(r#"{"base_url": "http://sim.local:9000"}"#)
            .expect("valid config");
        assert_eq!(config.base_url, "http://sim.local:9000");
        assert_eq!(config.poll_interval_ms, 1500);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(ClientConfig::from_json_str("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::new("not a url");
        assert!(matches!(config.base_url(), Err(ConfigError::InvalidBaseUrl { .. })));
        let config = ClientConfig::new("mailto:ops@example.com");
        assert!(matches!(config.base_url(), Err(ConfigError::CannotBeABase(_))));
    }

    #[test]
    fn test_zero_poll_interval_is_rejected() {
        let config = ClientConfig::from_json_str(r#"{"poll_interval_ms": 0}"#).expect("valid config");
        assert!(matches!(config.checked_poll_interval(), Err(ConfigError::ZeroPollInterval)));

        let config = ClientConfig::default().with_poll_interval(Duration::from_millis(250));
        assert_eq!(config.checked_poll_interval().ok(), Some(Duration::from_millis(250)));
    }
}
