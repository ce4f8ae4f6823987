//! Tests for the request head reader.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncWriteExt, BufReader};

    use crate::parser::{
        extract_target, parse_request_head, read_request_head, HeadLimits, RequestHead,
    };

    #[test]
    fn test_extract_target_from_request_line() {
        assert_eq!(extract_target("GET /index.html HTTP/1.1"), Some("/index.html"));
    }

    #[test]
    fn test_extract_target_stops_at_any_whitespace() {
        assert_eq!(extract_target("GET /a.html\tHTTP/1.1"), Some("/a.html"));
        assert_eq!(extract_target("GET /a.html\r"), Some("/a.html"));
    }

    #[test]
    fn test_extract_target_without_trailing_space() {
        // The terminator scan must stop at the end of the line.
        assert_eq!(extract_target("GET /bare"), Some("/bare"));
        assert_eq!(extract_target("GET "), Some(""));
    }

    #[test]
    fn test_extract_target_token_not_at_line_start() {
        assert_eq!(extract_target("X-Forwarded: GET /inner HTTP/1.0"), Some("/inner"));
    }

    #[test]
    fn test_extract_target_requires_token() {
        assert_eq!(extract_target("POST /form HTTP/1.1"), None);
        assert_eq!(extract_target("GET/nospace"), None);
        assert_eq!(extract_target("get /lowercase HTTP/1.1"), None);
        assert_eq!(extract_target(""), None);
    }

    #[test]
    fn test_extract_target_keeps_multibyte_characters() {
        assert_eq!(extract_target("GET /caf\u{e9}.html HTTP/1.1"), Some("/caf\u{e9}.html"));
    }

    #[test]
    fn test_parse_simple_get_request() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let head = parse_request_head(request);
        assert_eq!(head.target(), "/index.html");
        assert!(!head.is_empty());
    }

    #[test]
    fn test_parse_request_line_then_blank_line() {
        let head = parse_request_head(b"GET /index.html HTTP/1.1\r\n\r\n");
        assert_eq!(head, RequestHead::new("/index.html"));
    }

    #[test]
    fn test_parse_without_get_line_yields_empty_target() {
        let request = b"POST /submit HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let head = parse_request_head(request);
        assert_eq!(head.target(), "");
        assert!(head.is_empty());
    }

    #[test]
    fn test_parse_ignores_lines_after_blank_line() {
        let request = b"Host: example.com\r\n\r\nGET /body.html HTTP/1.1\r\n";
        assert!(parse_request_head(request).is_empty());
    }

    #[test]
    fn test_parse_last_get_line_wins() {
        let request = b"GET /first.html HTTP/1.1\r\nX-Note: GET /second.html\r\n\r\n";
        assert_eq!(parse_request_head(request).target(), "/second.html");
    }

    #[test]
    fn test_parse_accepts_bare_line_feeds() {
        let head = parse_request_head(b"GET /lf.html HTTP/1.0\nHost: x\n\n");
        assert_eq!(head.target(), "/lf.html");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_request_head(b"").is_empty());
    }

    #[test]
    fn test_parse_invalid_utf8_does_not_fault() {
        let head = parse_request_head(b"GET /bad\xff\xfe.html HTTP/1.1\r\n\r\n");
        assert!(head.target().starts_with("/bad"));
        assert!(head.target().ends_with(".html"));
    }

    #[tokio::test]
    async fn test_read_request_head_from_stream() {
        let mut reader: &[u8] = b"GET /index.html HTTP/1.1\r\nHost: localhost\r\nAccept: */*\r\n\r\n";
        let head = read_request_head(&mut reader, &HeadLimits::default()).await;
        assert_eq!(head.target(), "/index.html");
    }

    #[tokio::test]
    async fn test_read_stops_at_blank_line() {
        let input: &[u8] = b"GET /a.html HTTP/1.1\r\n\r\nleftover body";
        let mut reader = BufReader::new(input);
        let head = read_request_head(&mut reader, &HeadLimits::default()).await;
        assert_eq!(head.target(), "/a.html");

        // The body was not consumed by the head scan.
        let mut rest = String::new();
        tokio::io::AsyncReadExt::read_to_string(&mut reader, &mut rest).await.unwrap();
        assert_eq!(rest, "leftover body");
    }

    #[tokio::test]
    async fn test_read_without_get_line_yields_empty_target() {
        let mut reader: &[u8] = b"Host: localhost\r\nUser-Agent: test\r\n\r\n";
        let head = read_request_head(&mut reader, &HeadLimits::default()).await;
        assert!(head.is_empty());
    }

    #[tokio::test]
    async fn test_read_stream_ending_before_blank_line_keeps_target() {
        let mut reader: &[u8] = b"GET /early.html HTTP/1.1\r\nHost: localhost\r\n";
        let head = read_request_head(&mut reader, &HeadLimits::default()).await;
        assert_eq!(head.target(), "/early.html");
    }

    #[tokio::test]
    async fn test_read_empty_stream_yields_empty_target() {
        let mut reader: &[u8] = b"";
        let head = read_request_head(&mut reader, &HeadLimits::default()).await;
        assert!(head.is_empty());
    }

    #[tokio::test]
    async fn test_read_times_out_on_silent_client() {
        let (client, server) = tokio::io::duplex(64);
        let mut reader = BufReader::new(server);
        let limits = HeadLimits {
            read_timeout: Some(Duration::from_millis(50)),
            max_head_bytes: None,
        };

        let head = read_request_head(&mut reader, &limits).await;
        assert!(head.is_empty());
        drop(client);
    }

    #[tokio::test]
    async fn test_read_timeout_keeps_target_seen_so_far() {
        let (mut client, server) = tokio::io::duplex(64);
        client.write_all(b"GET /slow.html HTTP/1.1\r\n").await.unwrap();

        let mut reader = BufReader::new(server);
        let limits = HeadLimits {
            read_timeout: Some(Duration::from_millis(50)),
            max_head_bytes: None,
        };

        let head = read_request_head(&mut reader, &limits).await;
        assert_eq!(head.target(), "/slow.html");
        drop(client);
    }

    #[tokio::test]
    async fn test_read_stops_when_head_too_large() {
        let mut input = b"GET /big.html HTTP/1.1\r\nX-Padding: ".to_vec();
        input.extend(std::iter::repeat(b'a').take(256));
        input.extend_from_slice(b"\r\nGET /late.html HTTP/1.1\r\n\r\n");

        let mut reader: &[u8] = &input;
        let limits = HeadLimits {
            read_timeout: None,
            max_head_bytes: Some(64),
        };

        let head = read_request_head(&mut reader, &limits).await;
        assert_eq!(head.target(), "/big.html");
    }

    #[tokio::test]
    async fn test_read_head_exactly_at_size_limit() {
        let input: &[u8] = b"GET /fit.html HTTP/1.1\r\n\r\n";
        let mut reader = input;
        let limits = HeadLimits {
            read_timeout: None,
            max_head_bytes: Some(input.len()),
        };

        let head = read_request_head(&mut reader, &limits).await;
        assert_eq!(head.target(), "/fit.html");
    }

    #[tokio::test]
    async fn test_read_with_unbounded_size_limit() {
        let mut reader: &[u8] = b"GET /index.html HTTP/1.1\r\n\r\n";
        let limits = HeadLimits {
            read_timeout: None,
            max_head_bytes: Some(usize::MAX),
        };

        let head = read_request_head(&mut reader, &limits).await;
        assert_eq!(head.target(), "/index.html");
    }
}
