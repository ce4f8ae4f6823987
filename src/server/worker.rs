//! The per-connection request/response pipeline.

use std::time::SystemTime;

use log::{debug, info};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};

use crate::parser::{read_request_head, HeadLimits};
use crate::server::config::ServerConfig;
use crate::server::content_type::ContentType;
use crate::server::error::Error;
use crate::server::render::{render_body, TemplateMarkers};
use crate::server::resource::{DocumentRoot, ResourceStatus};
use crate::server::response::ResponseHead;

/// What a worker did for one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// The target path extracted from the request head.
    pub target: String,
    /// The content type resolved from the target path.
    pub content_type: ContentType,
    /// The single status decided for the response.
    pub status: ResourceStatus,
    /// Number of body bytes written.
    pub body_bytes: u64,
}

/// Serves exactly one request per connection.
///
/// A worker holds only immutable settings, so one instance can be shared by
/// every connection task.
#[derive(Debug, Clone)]
pub struct Worker {
    root: DocumentRoot,
    limits: HeadLimits,
    server_name: String,
    date_marker: String,
    server_marker: String,
    server_fragment: String,
}

impl Worker {
    /// Create a worker from the server configuration.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            root: DocumentRoot::new(config.document_root.clone()),
            limits: config.head_limits(),
            server_name: config.server_name.clone(),
            date_marker: config.date_marker.clone(),
            server_marker: config.server_marker.clone(),
            server_fragment: config.server_fragment.clone(),
        }
    }

    /// The store target paths are resolved against.
    pub fn document_root(&self) -> &DocumentRoot {
        &self.root
    }

    /// Read one request from `stream`, write one response, and close it.
    ///
    /// The status is decided before anything is written, and the response
    /// goes out as status line, headers, blank line, body. The stream is
    /// flushed and shut down on success and dropped on every path.
    pub async fn handle<S>(&self, mut stream: S) -> Result<Exchange, Error>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        debug!("Handling connection...");

        let head = {
            let mut reader = BufReader::new(&mut stream);
            read_request_head(&mut reader, &self.limits).await
        };

        let content_type = ContentType::resolve(head.target());
        let resource = self.root.open(head.target()).await;
        let status = resource.status();

        let date = httpdate::fmt_http_date(SystemTime::now());
        let response_head = ResponseHead::standard(
            status.status_code(),
            content_type,
            &date,
            &self.server_name,
        );
        let markers = TemplateMarkers {
            date_marker: &self.date_marker,
            date: &date,
            server_marker: &self.server_marker,
            server_fragment: &self.server_fragment,
        };

        let mut writer = BufWriter::new(&mut stream);
        response_head.write_to(&mut writer).await?;
        let body_bytes = render_body(&mut writer, resource, content_type, &markers).await?;
        writer.flush().await?;
        writer.shutdown().await?;

        let exchange = Exchange {
            target: head.target().to_string(),
            content_type,
            status,
            body_bytes,
        };
        info!(
            "GET {target} -> {code} {mime} ({body_bytes} bytes)",
            target = exchange.target,
            code = status.status_code().as_u16(),
            mime = content_type,
        );
        debug!("Done handling connection.");

        Ok(exchange)
    }
}
