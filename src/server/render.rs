//! Response body rendering.
//!
//! Text resources are copied line by line, with dynamic content appended
//! after lines carrying a template marker. Binary resources are copied
//! verbatim.

use log::warn;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::server::content_type::ContentType;
use crate::server::resource::Resource;

/// Body of a text response whose resource could not be found.
pub const NOT_FOUND_BODY: &str = "<h1>404 Not Found</h1>";

/// Marker tokens and the content appended after lines that contain them.
#[derive(Debug, Clone, Copy)]
pub struct TemplateMarkers<'a> {
    /// Token that triggers appending `date`.
    pub date_marker: &'a str,
    /// Formatted date written after a date-marker line.
    pub date: &'a str,
    /// Token that triggers appending `server_fragment`.
    pub server_marker: &'a str,
    /// HTML fragment written after a server-marker line.
    pub server_fragment: &'a str,
}

/// Write the body for `resource` and return the number of bytes written.
pub async fn render_body<W>(
    writer: &mut W,
    resource: Resource,
    content_type: ContentType,
    markers: &TemplateMarkers<'_>,
) -> std::io::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    match (resource, content_type.is_text()) {
        (Resource::Found { file, .. }, true) => {
            render_text(&mut BufReader::new(file), writer, markers).await
        }
        (Resource::NotFound, true) => {
            writer.write_all(NOT_FOUND_BODY.as_bytes()).await?;
            Ok(NOT_FOUND_BODY.len() as u64)
        }
        (Resource::Found { mut file, len }, false) => {
            let copied = tokio::io::copy(&mut file, writer).await?;
            if copied != len {
                warn!("Resource changed while sending: expected {len} bytes, sent {copied}");
            }
            Ok(copied)
        }
        // Missing binaries get no fallback content.
        (Resource::NotFound, false) => Ok(0),
    }
}

/// Copy a text resource line by line, augmenting marker lines.
///
/// Each line is written with its original terminator. A line containing the
/// date marker is followed by the date; one containing the server marker is
/// followed by the server fragment (after the date, if it has both). A final
/// line without a terminator gets no line ending added, so the appended text
/// follows it directly on the same line.
pub async fn render_text<R, W>(
    reader: &mut R,
    writer: &mut W,
    markers: &TemplateMarkers<'_>,
) -> std::io::Result<u64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = Vec::new();
    let mut written = 0u64;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }

        writer.write_all(&line).await?;
        written += line.len() as u64;

        if contains_marker(&line, markers.date_marker) {
            writer.write_all(markers.date.as_bytes()).await?;
            written += markers.date.len() as u64;
        }
        if contains_marker(&line, markers.server_marker) {
            writer.write_all(markers.server_fragment.as_bytes()).await?;
            written += markers.server_fragment.len() as u64;
        }
    }

    Ok(written)
}

fn contains_marker(line: &[u8], marker: &str) -> bool {
    !marker.is_empty()
        && line
            .windows(marker.len())
            .any(|window| window == marker.as_bytes())
}
