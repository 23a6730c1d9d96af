//! API configuration
//!
//! Values come from `API_*` environment variables (for example `API_PORT`,
//! `API_DATABASE_URL`); anything unset keeps its default.

use std::path::PathBuf;

use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// PostgreSQL connection string; the in-memory store is used when unset
    pub database_url: Option<String>,
    /// Log level
    pub log_level: String,
    /// Quote number draws before creation fails
    pub quote_id_max_attempts: u32,
    /// JSON rate table replacing the standard one
    pub rate_table_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: None,
            log_level: "info".to_string(),
            quote_id_max_attempts: domain_quote::quote_id::DEFAULT_MAX_ATTEMPTS,
            rate_table_path: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::with_prefix("API").try_parsing(true))
    }

    /// Loads configuration from any `config` source
    pub fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
