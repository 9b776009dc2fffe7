//! Service configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML/YAML/JSON file, then
//! `CATALOG_*` environment variables (`CATALOG_LISTEN`, `CATALOG_API_PREFIX`,
//! `CATALOG_CHANNEL_CAPACITY`, `CATALOG_LOG_LEVEL`).

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Socket address the HTTP server binds to.
    pub listen: String,
    /// Path prefix every route is mounted under. Empty mounts at the root.
    pub api_prefix: String,
    /// Request queue length of each store actor.
    pub channel_capacity: usize,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_string(),
            api_prefix: "/api".to_string(),
            channel_capacity: 32,
            log_level: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Loads defaults, then `path` (if given, it must exist), then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(Environment::with_prefix("CATALOG").try_parsing(true));
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigurationError> {
        let config: CatalogConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.channel_capacity == 0 {
            return Err(ConfigurationError::Invalid(
                "channel_capacity must be greater than 0".into(),
            ));
        }
        self.listen.parse::<SocketAddr>().map_err(|e| {
            ConfigurationError::Invalid(format!(
                "listen '{}' is not a valid socket address: {}",
                self.listen, e
            ))
        })?;
        if !self.api_prefix.is_empty()
            && (!self.api_prefix.starts_with('/') || self.api_prefix.ends_with('/'))
        {
            return Err(ConfigurationError::Invalid(format!(
                "api_prefix must start with '/' and not end with '/', got '{}'",
                self.api_prefix
            )));
        }
        Ok(())
    }

    /// The listen address, already checked by [`CatalogConfig::validate`].
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigurationError> {
        self.listen
            .parse()
            .map_err(|e| ConfigurationError::Invalid(format!("listen: {e}")))
    }
}
