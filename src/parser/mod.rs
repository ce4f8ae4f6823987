//! Request head reader.
//!
//! This module scans the head of an incoming HTTP request line by line and
//! extracts the one thing the responder cares about: the target path of the
//! retrieval request.

mod request;
mod error;
mod tests;

// Re-export public items
pub use request::{HeadLimits, RequestHead, GET_TOKEN};
pub use error::Error;

// Re-export the reader entry points
pub use request::{extract_target, parse_request_head, read_request_head};
