//! Response status and header block.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::server::content_type::ContentType;

/// HTTP status codes the responder emits, with their reason phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    NotFound = 404,
}

impl StatusCode {
    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }

    /// Get the numeric status code.
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}

/// The status line and headers of a response, in emission order.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    /// The HTTP status code
    pub status: StatusCode,
    /// The HTTP headers, written in insertion order
    pub headers: Vec<(String, String)>,
}

impl ResponseHead {
    /// Create a response head with the given status and no headers.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    /// Build the standard head: `Date`, `Server`, `Connection: close`, and
    /// `Content-Type`, in that order.
    pub fn standard(
        status: StatusCode,
        content_type: ContentType,
        date: &str,
        server_name: &str,
    ) -> Self {
        Self::new(status)
            .with_header("Date", date)
            .with_header("Server", server_name)
            .with_header("Connection", "close")
            .with_content_type(content_type)
    }

    /// Add a header, or replace the value of an existing one in place.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: ContentType) -> Self {
        self.with_header("Content-Type", content_type.mime())
    }

    /// Look up a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Convert the head to bytes, including the blank separator line.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        let status_line = format!(
            "HTTP/1.1 {} {}\r\n",
            self.status.as_u16(),
            self.status.reason_phrase()
        );
        bytes.extend_from_slice(status_line.as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        bytes.extend_from_slice(b"\r\n");

        bytes
    }

    /// Write the head to `writer`.
    pub async fn write_to<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        writer.write_all(&self.to_bytes()).await
    }
}
