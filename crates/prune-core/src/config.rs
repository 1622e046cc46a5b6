//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/emails";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "PRUNE_API_URL";

/// Connection settings for the mail API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base endpoint, e.g. `http://localhost:8080/api/emails`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Creates a config for the given base URL with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Applies the `PRUNE_API_URL` override if it is set and non-empty.
    #[must_use]
    pub fn with_env_override(mut self) -> Self {
        if let Ok(url) = std::env::var(BASE_URL_ENV)
            && !url.trim().is_empty()
        {
            self.base_url = url.trim().to_string();
        }
        self
    }
}
