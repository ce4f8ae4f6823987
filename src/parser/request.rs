//! Request head scanning and target path extraction.

use std::borrow::Cow;
use std::time::Duration;

use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::parser::error::Error;

/// The retrieval-method token looked for on every head line.
pub const GET_TOKEN: &str = "GET ";

/// The part of an HTTP request head the responder acts on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHead {
    target: String,
}

impl RequestHead {
    /// Create a request head for the given target path.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The target path, or `""` when no retrieval line was seen.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Whether no target path could be extracted.
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }
}

/// Optional bounds on how long and how large a request head may be.
///
/// Both are disabled by default; a silent client can then hold its worker
/// indefinitely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadLimits {
    /// Maximum time to wait for each head line.
    pub read_timeout: Option<Duration>,
    /// Maximum total size of the request head in bytes.
    pub max_head_bytes: Option<usize>,
}

/// Extract the target path from a single head line.
///
/// Returns the text following [`GET_TOKEN`] up to the first whitespace
/// character or the end of the line, or `None` if the line does not contain
/// the token at all.
///
/// # Examples
///
/// ```
/// use webworker::parser::extract_target;
///
/// assert_eq!(extract_target("GET /index.html HTTP/1.1"), Some("/index.html"));
/// assert_eq!(extract_target("GET /no-version"), Some("/no-version"));
/// assert_eq!(extract_target("Host: example.com"), None);
/// ```
pub fn extract_target(line: &str) -> Option<&str> {
    let start = line.find(GET_TOKEN)? + GET_TOKEN.len();
    let rest = &line[start..];
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Scan an in-memory request head.
///
/// Lines are split on `\n`; scanning stops at the first empty line or the
/// end of the input. The last line containing the retrieval token wins.
pub fn parse_request_head(input: &[u8]) -> RequestHead {
    let mut target = String::new();

    for raw in input.split(|&b| b == b'\n') {
        let line = decode_line(raw);
        if let Some(found) = extract_target(&line) {
            target = found.to_string();
        }
        if line.is_empty() {
            break;
        }
    }

    RequestHead::new(target)
}

/// Read a request head from a connection.
///
/// Reads line by line until an empty line terminates the head. If the stream
/// ends, fails, or trips one of `limits` first, the scan stops and the target
/// recorded so far is kept (empty if no retrieval line had arrived). This
/// never fails; problems are logged and folded into the result.
pub async fn read_request_head<R>(reader: &mut R, limits: &HeadLimits) -> RequestHead
where
    R: AsyncBufRead + Unpin,
{
    let mut target = String::new();
    let mut consumed = 0usize;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match read_head_line(reader, &mut buf, consumed, limits).await {
            Ok(0) => {
                debug!("Connection closed before the end of the request head");
                break;
            }
            Ok(n) => consumed += n,
            Err(e) => {
                warn!("Request error: {e}");
                break;
            }
        }

        let line = decode_line(&buf);
        debug!("Request line: ({line})");

        if let Some(found) = extract_target(&line) {
            target = found.to_string();
        }
        if line.is_empty() {
            break;
        }
    }

    RequestHead::new(target)
}

async fn read_head_line<R>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    consumed: usize,
    limits: &HeadLimits,
) -> Result<usize, Error>
where
    R: AsyncBufRead + Unpin,
{
    match limits.read_timeout {
        Some(limit) => {
            let read = read_line_bounded(reader, buf, consumed, limits.max_head_bytes);
            match tokio::time::timeout(limit, read).await {
                Ok(result) => result,
                Err(_) => Err(Error::Timeout(limit)),
            }
        }
        None => read_line_bounded(reader, buf, consumed, limits.max_head_bytes).await,
    }
}

async fn read_line_bounded<R>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    consumed: usize,
    max_head_bytes: Option<usize>,
) -> Result<usize, Error>
where
    R: AsyncBufRead + Unpin,
{
    let Some(max) = max_head_bytes else {
        return Ok(reader.read_until(b'\n', buf).await?);
    };
    let remaining = max.saturating_sub(consumed);

    // One byte past the budget tells "exactly full" apart from "overflowing".
    let n = (&mut *reader)
        .take((remaining as u64).saturating_add(1))
        .read_until(b'\n', buf)
        .await?;
    if n > remaining {
        return Err(Error::HeadTooLarge(max));
    }
    Ok(n)
}

fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}
