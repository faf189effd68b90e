#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_ENDPOINT: &str = "https://api.datamuse.com/words";
pub const ENV_ENDPOINT: &str = "DATAMUSE_ENDPOINT";
pub const ENV_TIMEOUT: &str = "DATAMUSE_TIMEOUT_SECONDS";
pub const ENV_USER_AGENT: &str = "DATAMUSE_USER_AGENT";

/// Settings for the upstream HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
    /// `None` keeps the HTTP client's own default.
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `DATAMUSE_*` variables provided by `lookup`.
    /// Unset variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_seconds = match lookup(ENV_TIMEOUT) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                SearchError::InvalidConfigValue {
                    field: ENV_TIMEOUT.to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            endpoint: lookup(ENV_ENDPOINT).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout_seconds,
            user_agent: lookup(ENV_USER_AGENT),
        })
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
