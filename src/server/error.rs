//! Error types for the HTTP server.

use thiserror::Error;

/// Errors that can occur while configuring the server or serving a
/// connection.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error on a connection or the listener.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration file could not be deserialized.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
