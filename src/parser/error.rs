//! Error types for the request head reader.

use std::time::Duration;

use thiserror::Error;

/// Errors that can end the scan of a request head early.
///
/// None of these are fatal to the connection: the reader logs them and keeps
/// whatever target path it had recorded so far.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying stream failed while reading a head line.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// No complete line arrived within the configured read timeout.
    #[error("Timed out after {0:?} waiting for a request line")]
    Timeout(Duration),

    /// The request head grew past the configured size limit.
    #[error("Request head exceeds {0} bytes")]
    HeadTooLarge(usize),
}
