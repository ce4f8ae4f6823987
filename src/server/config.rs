//! Server configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::parser::HeadLimits;
use crate::server::error::Error;

/// Environment variable that overrides the listen address.
pub const ADDR_ENV: &str = "WEBWORKER_ADDR";

/// HTTP server configuration.
///
/// Every field has a default, so a JSON configuration file only needs to
/// name the fields it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The maximum number of concurrent connections.
    pub max_connections: usize,
    /// Directory target paths are looked up under.
    pub document_root: PathBuf,
    /// Value of the `Server` header.
    pub server_name: String,
    /// Token that gets the current date appended in text resources.
    pub date_marker: String,
    /// Token that gets `server_fragment` appended in text resources.
    pub server_marker: String,
    /// HTML written after a server-marker line.
    pub server_fragment: String,
    /// Per-line read timeout for the request head, in seconds.
    pub read_timeout_secs: Option<u64>,
    /// Maximum request head size in bytes.
    pub max_head_bytes: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            max_connections: 1024,
            document_root: PathBuf::from("."),
            server_name: "webworker-rs".to_string(),
            date_marker: "<cs371date>".to_string(),
            server_marker: "<cs371server>".to_string(),
            server_fragment: "<br>\nwebworker-rs</br>".to_string(),
            read_timeout_secs: None,
            max_head_bytes: None,
        }
    }
}

impl ServerConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(mut self) -> Result<Self, Error> {
        if let Ok(addr) = std::env::var(ADDR_ENV) {
            self.addr = addr
                .parse()
                .map_err(|e| Error::ConfigError(format!("{ADDR_ENV}={addr}: {e}")))?;
        }
        Ok(self)
    }

    /// The request head limits derived from this configuration.
    pub fn head_limits(&self) -> HeadLimits {
        HeadLimits {
            read_timeout: self.read_timeout_secs.map(Duration::from_secs),
            max_head_bytes: self.max_head_bytes,
        }
    }

    fn validate(self) -> Result<Self, Error> {
        if self.max_connections == 0 {
            return Err(Error::ConfigError(
                "max_connections must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}
