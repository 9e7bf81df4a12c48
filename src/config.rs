//! # Configuration
//!
//! Layered service configuration.
//!
//! Values are resolved, lowest priority first, from:
//!
//! 1. built-in defaults
//! 2. an optional configuration file (`config/default.toml` unless another
//!    path is given)
//! 3. environment variables prefixed with `COURSE_QUOTES`, nested keys
//!    separated by `__` (e.g. `COURSE_QUOTES__SERVER__PORT=9000`)
//!
//! Command-line overrides are applied on top by the binary.
//!
//! # Examples
//!
//! ```
//! use course_quotes::config::AppConfig;
//!
//! let config = AppConfig::default();
//! assert_eq!(config.server_address(), "0.0.0.0:5000");
//! assert_eq!(config.catalog.path.to_str(), Some("static/providers.json"));
//! ```

use crate::application::error::{InfrastructureError, InfrastructureResult};
use crate::application::use_cases::EmptyTopicsPolicy;
use crate::infrastructure::catalog::DEFAULT_CATALOG_PATH;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "COURSE_QUOTES";

/// Configuration file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config/default";

/// Top-level service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Provider catalog settings.
    pub catalog: CatalogConfig,
    /// Quote request handling settings.
    pub quotes: QuotesConfig,
    /// Logging settings.
    pub log: LogConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

/// Provider catalog settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path of the JSON catalog document.
    pub path: PathBuf,
}

/// Quote request handling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotesConfig {
    /// How an empty `topics` object is answered.
    pub empty_topics: EmptyTopicsPolicy,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            catalog: CatalogConfig {
                path: PathBuf::from(DEFAULT_CATALOG_PATH),
            },
            quotes: QuotesConfig {
                empty_topics: EmptyTopicsPolicy::default(),
            },
            log: LogConfig {
                level: "info".to_string(),
                format: LogFormat::default(),
            },
        }
    }
}

impl AppConfig {
    /// Returns a builder preloaded with defaults, the configuration file
    /// and the environment.
    ///
    /// Callers may add overrides before building.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` if a default cannot be set.
    pub fn builder(file: Option<&Path>) -> InfrastructureResult<ConfigBuilder<DefaultState>> {
        let defaults = Self::default();
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        config::Config::builder()
            .set_default("server.host", defaults.server.host)
            .and_then(|b| b.set_default("server.port", i64::from(defaults.server.port)))
            .and_then(|b| {
                b.set_default(
                    "catalog.path",
                    defaults.catalog.path.to_string_lossy().into_owned(),
                )
            })
            .and_then(|b| {
                b.set_default("quotes.empty_topics", defaults.quotes.empty_topics.to_string())
            })
            .and_then(|b| b.set_default("log.level", defaults.log.level))
            .and_then(|b| b.set_default("log.format", defaults.log.format.to_string()))
            .map(|b| {
                b.add_source(file_source)
                    .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            })
            .map_err(|e| InfrastructureError::configuration(e.to_string()))
    }

    /// Builds the final configuration from a prepared builder.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` if a source cannot be
    /// read or a value has the wrong type.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> InfrastructureResult<Self> {
        builder
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| InfrastructureError::configuration(e.to_string()))
    }

    /// Loads configuration from defaults, file and environment.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_builder`].
    pub fn load(file: Option<&Path>) -> InfrastructureResult<Self> {
        Self::from_builder(Self::builder(file)?)
    }

    /// Returns the `host:port` address to bind.
    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
