//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and an optional `.env` file). It is built once at
//! process start and shared read-only afterwards.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{Error, Result};

/// Default Tailscale REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.tailscale.com/api/v2";

/// Tailnet sentinel meaning "the tailnet owning the API key".
pub const DEFAULT_TAILNET: &str = "-";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Tailscale API access.
    pub tailscale: TailscaleConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Tailscale API credentials and addressing.
#[derive(Clone, Serialize, Deserialize)]
pub struct TailscaleConfig {
    /// Bearer token sent with every request.
    pub api_key: String,

    /// Tailnet the devices are listed for.
    pub tailnet: String,

    /// Base URL of the REST API, without trailing slash.
    pub api_url: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for TailscaleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TailscaleConfig")
            .field("api_key", &"[REDACTED]")
            .field("tailnet", &self.tailnet)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl TailscaleConfig {
    /// Create a config for the given key, targeting the key owner's tailnet.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            tailnet: DEFAULT_TAILNET.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Override the API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the tailnet.
    pub fn with_tailnet(mut self, tailnet: impl Into<String>) -> Self {
        self.tailnet = tailnet.into();
        self
    }
}

impl Config {
    /// Create a configuration with defaults for everything but the API key.
    pub fn new(tailscale: TailscaleConfig) -> Self {
        Self {
            server: ServerConfig {
                name: "tailscale-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            tailscale,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `TAILSCALE_API_KEY` is required. `TAILSCALE_TAILNET`,
    /// `TAILSCALE_API_URL`, `MCP_SERVER_NAME` and `MCP_LOG_LEVEL` are optional.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("TAILSCALE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::config("TAILSCALE_API_KEY environment variable is required"))?;

        let mut tailscale = TailscaleConfig::new(api_key);

        if let Ok(tailnet) = std::env::var("TAILSCALE_TAILNET") {
            if !tailnet.is_empty() {
                tailscale = tailscale.with_tailnet(tailnet);
            }
        }

        if let Ok(api_url) = std::env::var("TAILSCALE_API_URL") {
            if !api_url.is_empty() {
                info!("Using Tailscale API at {}", api_url);
                tailscale = tailscale.with_api_url(api_url);
            }
        }

        let mut config = Self::new(tailscale);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            std::env::remove_var("TAILSCALE_API_KEY");
            std::env::remove_var("TAILSCALE_TAILNET");
            std::env::remove_var("TAILSCALE_API_URL");
        }
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("TAILSCALE_API_KEY"));
    }

    #[test]
    fn test_empty_api_key_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("TAILSCALE_API_KEY", "");
        }
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    fn test_defaults_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("TAILSCALE_API_KEY", "tskey-api-test");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.tailscale.api_key, "tskey-api-test");
        assert_eq!(config.tailscale.tailnet, "-");
        assert_eq!(config.tailscale.api_url, DEFAULT_API_URL);
        clear_env();
    }

    #[test]
    fn test_tailnet_and_url_overrides() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("TAILSCALE_API_KEY", "tskey-api-test");
            std::env::set_var("TAILSCALE_TAILNET", "example.com");
            std::env::set_var("TAILSCALE_API_URL", "http://localhost:9999/api/v2/");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.tailscale.tailnet, "example.com");
        assert_eq!(config.tailscale.api_url, "http://localhost:9999/api/v2");
        clear_env();
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let config = Config::new(TailscaleConfig::new("super_secret_key"));
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
