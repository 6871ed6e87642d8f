//! Server configuration.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "FLIGHTS_BIND_ADDR";

/// Environment variable pointing at a catalog file.
pub const CATALOG_VAR: &str = "FLIGHTS_CATALOG";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid FLIGHTS_BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Configuration for the flight search server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// Catalog file to load instead of the built-in catalog.
    pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(bind_addr: SocketAddr, catalog_path: Option<PathBuf>) -> Self {
        Self {
            bind_addr,
            catalog_path,
        }
    }

    /// Read configuration from the process environment.
    ///
    /// Unset or empty variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let set = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());

        if let Some(value) = set(BIND_ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr {
                    value: value.clone(),
                    source,
                })?;
        }

        if let Some(path) = set(CATALOG_VAR) {
            config.catalog_path = Some(PathBuf::from(path.trim()));
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            catalog_path: None,
        }
    }
}
