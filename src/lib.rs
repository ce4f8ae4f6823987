//! A minimal per-connection HTTP responder.
//!
//! Each connection carries exactly one request. The responder reads the
//! request head, picks out the target path of the `GET` line, and answers
//! with either a text document (with date and server markers filled in) or a
//! binary resource copied verbatim. Every response ends with the connection
//! being closed.
//!
//! # Features
//!
//! - Line-oriented request head reading with optional timeout and size limits
//! - Content type resolution for html, gif, jpeg, png, and icon resources
//! - A single found/not-found decision made before any byte is written
//! - Template marker substitution for text resources
//! - A tokio accept loop with one worker task per connection
//!
//! # Examples
//!
//! ## Reading a request head
//!
//! ```
//! use webworker::parse_request_head;
//!
//! let head = parse_request_head(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n");
//! assert_eq!(head.target(), "/index.html");
//!
//! let head = parse_request_head(b"Host: example.com\r\n\r\n");
//! assert!(head.is_empty());
//! ```
//!
//! ## Serving one connection
//!
//! ```no_run
//! use webworker::{ServerConfig, Worker};
//! use tokio::net::TcpListener;
//!
//! # async fn run() -> Result<(), webworker::ServerError> {
//! let worker = Worker::new(&ServerConfig::default());
//! let listener = TcpListener::bind("127.0.0.1:8080").await?;
//! let (socket, _) = listener.accept().await?;
//! let exchange = worker.handle(socket).await?;
//! println!("{} -> {:?}", exchange.target, exchange.status);
//! # Ok(())
//! # }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request_head, read_request_head, Error as ParserError, HeadLimits, RequestHead};
pub use server::{
    ContentType, DocumentRoot, Error as ServerError, Exchange, HttpServer, ResourceStatus,
    ServerConfig, StatusCode, Worker,
};
