use subsidy_client::{ClientConfig, SubsidyClient, SubsidyClientError};
use thiserror::Error;

pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:8080";

/// Startup configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid subsidy client configuration: {0}")]
    Client(#[from] SubsidyClientError),
}

/// Process-level settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address, e.g. "127.0.0.1:8080".
    pub api_address: String,
}

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// Client for upstream searches and proxy-routed detail lookups.
    pub client: SubsidyClient,
}

impl AppState {
    pub fn new(config: AppConfig, client: SubsidyClient) -> Self {
        Self { config, client }
    }

    /// Load shared state from environment variables.
    ///
    /// When `SUBSIDY_PROXY_BASE_URL` is unset the detail proxy is this very
    /// server, reached over loopback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_address =
            std::env::var("API_ADDRESS").unwrap_or_else(|_| DEFAULT_API_ADDRESS.into());

        let mut client_cfg = ClientConfig::from_env()?;
        if std::env::var("SUBSIDY_PROXY_BASE_URL").is_err() {
            client_cfg.proxy_base_url = loopback_base(&api_address);
        }

        Ok(Self {
            config: AppConfig { api_address },
            client: SubsidyClient::new(client_cfg)?,
        })
    }
}

/// `0.0.0.0:8080` → `http://127.0.0.1:8080`.
pub fn loopback_base(api_address: &str) -> String {
    let addr = match api_address.strip_prefix("0.0.0.0:") {
        Some(port) => format!("127.0.0.1:{port}"),
        None => api_address.to_string(),
    };
    format!("http://{addr}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_address_maps_to_loopback() {
        assert_eq!(loopback_base("0.0.0.0:3000"), "http://127.0.0.1:3000");
        assert_eq!(loopback_base("localhost:8080"), "http://localhost:8080");
    }
}
