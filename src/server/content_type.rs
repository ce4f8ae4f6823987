//! Content type resolution from target paths.

use std::fmt;

/// The MIME categories the responder can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// `text/html`, the default for every non-image path.
    Html,
    /// `image/gif`
    Gif,
    /// `image/jpeg`
    Jpeg,
    /// `image/png`
    Png,
    /// `image/x-icon`
    Icon,
}

impl ContentType {
    /// Resolve the content type for a target path.
    ///
    /// Checks are case-insensitive substring matches, in this order:
    /// `.gif`, `.jpeg`, `.png`, then `ico`. The last one is deliberately
    /// loose, so any path containing `ico` anywhere is served as an icon.
    ///
    /// # Examples
    ///
    /// ```
    /// use webworker::ContentType;
    ///
    /// assert_eq!(ContentType::resolve("/logo.PNG"), ContentType::Png);
    /// assert_eq!(ContentType::resolve("/favicon.ico"), ContentType::Icon);
    /// assert_eq!(ContentType::resolve("/index.html"), ContentType::Html);
    /// ```
    pub fn resolve(path: &str) -> Self {
        let path = path.to_lowercase();
        if path.contains(".gif") {
            ContentType::Gif
        } else if path.contains(".jpeg") {
            ContentType::Jpeg
        } else if path.contains(".png") {
            ContentType::Png
        } else if path.contains("ico") {
            ContentType::Icon
        } else {
            ContentType::Html
        }
    }

    /// The MIME string sent in the `Content-Type` header.
    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Html => "text/html",
            ContentType::Gif => "image/gif",
            ContentType::Jpeg => "image/jpeg",
            ContentType::Png => "image/png",
            ContentType::Icon => "image/x-icon",
        }
    }

    /// Whether bodies of this type go through marker substitution.
    pub fn is_text(&self) -> bool {
        matches!(self, ContentType::Html)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}
