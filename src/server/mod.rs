//! HTTP server implementation for webworker-rs.
//!
//! This module turns a parsed request head into a response: it resolves the
//! content type, decides between found and not found, writes the header
//! block, and renders the body. [`HttpServer`] runs one [`Worker`] task per
//! accepted connection.

mod content_type;
mod config;
mod error;
mod http_server;
mod render;
mod resource;
mod response;
mod worker;

// Re-export public items
pub use content_type::ContentType;
pub use config::{ServerConfig, ADDR_ENV};
pub use error::Error;
pub use http_server::HttpServer;
pub use render::{render_body, render_text, TemplateMarkers, NOT_FOUND_BODY};
pub use resource::{DocumentRoot, Resource, ResourceStatus};
pub use response::{ResponseHead, StatusCode};
pub use worker::{Exchange, Worker};
