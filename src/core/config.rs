//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables and defaults. The remote API settings are fixed
//! values and are never read from the environment.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Public SWAPI endpoint.
pub const DEFAULT_SWAPI_BASE_URL: &str = "https://swapi.dev/api";

/// Ceiling for a single remote round trip.
pub const DEFAULT_SWAPI_TIMEOUT_MS: u64 = 10_000;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Remote API client configuration.
    pub swapi: SwapiConfig,
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

/// Immutable settings handed to the SWAPI client at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapiConfig {
    /// Base URL without trailing slash, e.g. `https://swapi.dev/api`.
    pub base_url: String,

    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl SwapiConfig {
    /// Default timeout against a different base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for SwapiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SWAPI_BASE_URL.to_string(),
            timeout_ms: DEFAULT_SWAPI_TIMEOUT_MS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "swapi-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            swapi: SwapiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_TRANSPORT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "holocron");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "holocron");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_log_level_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
        let config = Config::from_env();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_swapi_defaults() {
        let config = Config::default();
        assert_eq!(config.swapi.base_url, "https://swapi.dev/api");
        assert_eq!(config.swapi.timeout_ms, 10_000);
    }

    #[test]
    fn test_with_base_url_keeps_timeout() {
        let swapi = SwapiConfig::with_base_url("http://localhost:1234");
        assert_eq!(swapi.base_url, "http://localhost:1234");
        assert_eq!(swapi.timeout_ms, DEFAULT_SWAPI_TIMEOUT_MS);
    }
}
