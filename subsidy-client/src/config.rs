//! Client configuration.
//!
//! # Environment variables
//!
//! - `SUBSIDY_API_BASE_URL`      = upstream list/detail API base
//!   (default: jGrants public v1)
//! - `SUBSIDY_PROXY_BASE_URL`    = base of the local detail proxy route
//!   (default: `http://127.0.0.1:8080`)
//! - `SUBSIDY_HTTP_TIMEOUT_SECS` = optional request timeout; unset means none

use std::time::Duration;

use crate::error_handler::{Result, env_opt_u64, env_or, validate_http_endpoint};

pub const DEFAULT_API_BASE_URL: &str = "https://api.jgrants-portal.go.jp/exp/v1/public";
pub const DEFAULT_PROXY_BASE_URL: &str = "http://127.0.0.1:8080";

/// Everything [`crate::SubsidyClient`] needs; passed explicitly at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base of the upstream API; list requests go to `{api_base_url}/subsidies`.
    pub api_base_url: String,

    /// Base of the local proxy; detail requests go to
    /// `{proxy_base_url}/api/subsidies?id=...`.
    pub proxy_base_url: String,

    /// Request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,

    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            proxy_base_url: DEFAULT_PROXY_BASE_URL.to_string(),
            timeout: None,
            user_agent: concat!("subsidy-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Builds a config with both base URLs set; other fields use defaults.
    pub fn with_bases(api_base_url: impl Into<String>, proxy_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            proxy_base_url: proxy_base_url.into(),
            ..Self::default()
        }
    }

    /// Loads the config from environment variables.
    ///
    /// # Errors
    /// - [`crate::ConfigError::InvalidFormat`] if a base URL lacks a scheme
    /// - [`crate::ConfigError::InvalidNumber`] if the timeout is not a `u64`
    pub fn from_env() -> Result<Self> {
        let api_base_url = env_or("SUBSIDY_API_BASE_URL", DEFAULT_API_BASE_URL);
        let proxy_base_url = env_or("SUBSIDY_PROXY_BASE_URL", DEFAULT_PROXY_BASE_URL);
        let timeout = env_opt_u64("SUBSIDY_HTTP_TIMEOUT_SECS")?.map(Duration::from_secs);

        let cfg = Self {
            api_base_url,
            proxy_base_url,
            timeout,
            ..Self::default()
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        validate_http_endpoint("SUBSIDY_API_BASE_URL", &self.api_base_url)?;
        validate_http_endpoint("SUBSIDY_PROXY_BASE_URL", &self.proxy_base_url)?;
        Ok(())
    }
}
