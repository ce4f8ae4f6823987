//! Resource lookup and the found/not-found decision.

use std::path::{Path, PathBuf};

use log::info;
use tokio::fs::File;

use crate::server::response::StatusCode;

/// Whether the resource behind a target path could be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    Found,
    NotFound,
}

impl ResourceStatus {
    /// The status code this outcome is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResourceStatus::Found => StatusCode::Ok,
            ResourceStatus::NotFound => StatusCode::NotFound,
        }
    }
}

/// An opened resource, or the absence of one.
///
/// The open handle is the only evidence of existence; the status is derived
/// from it and never looked up a second time.
#[derive(Debug)]
pub enum Resource {
    /// The resource opened as a regular file of `len` bytes.
    Found { file: File, len: u64 },
    NotFound,
}

impl Resource {
    /// The status decided for this resource.
    pub fn status(&self) -> ResourceStatus {
        match self {
            Resource::Found { .. } => ResourceStatus::Found,
            Resource::NotFound => ResourceStatus::NotFound,
        }
    }
}

/// A read-only file store rooted at a directory.
///
/// Target paths are joined onto the root after dropping their leading `/`.
/// No other normalization happens: `..` segments are passed through to the
/// filesystem as-is.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
}

impl DocumentRoot {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory target paths are resolved under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The filesystem path a target path maps to.
    pub fn locate(&self, target: &str) -> PathBuf {
        self.root.join(target.trim_start_matches('/'))
    }

    /// Try to open the resource behind `target` for reading.
    ///
    /// An empty target, a missing or unreadable file, and anything that is
    /// not a regular file all come back as [`Resource::NotFound`].
    pub async fn open(&self, target: &str) -> Resource {
        if target.is_empty() {
            info!("No target path in request");
            return Resource::NotFound;
        }

        let path = self.locate(target);
        let file = match File::open(&path).await {
            Ok(file) => file,
            Err(e) => {
                info!("File not found: {target} ({e})");
                return Resource::NotFound;
            }
        };

        match file.metadata().await {
            Ok(meta) if meta.is_file() => Resource::Found {
                file,
                len: meta.len(),
            },
            Ok(_) => {
                info!("Not a regular file: {target}");
                Resource::NotFound
            }
            Err(e) => {
                info!("Cannot inspect {target}: {e}");
                Resource::NotFound
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_strips_leading_slashes() {
        let root = DocumentRoot::new("/srv/www");
        assert_eq!(root.locate("/index.html"), PathBuf::from("/srv/www/index.html"));
        assert_eq!(root.locate("//a/b.png"), PathBuf::from("/srv/www/a/b.png"));
        assert_eq!(root.locate("plain.html"), PathBuf::from("/srv/www/plain.html"));
    }

    #[test]
    fn test_locate_does_not_normalize_parent_segments() {
        let root = DocumentRoot::new("/srv/www");
        assert_eq!(
            root.locate("/../secret.txt"),
            PathBuf::from("/srv/www/../secret.txt")
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ResourceStatus::Found.status_code(), StatusCode::Ok);
        assert_eq!(ResourceStatus::NotFound.status_code(), StatusCode::NotFound);
    }

    #[tokio::test]
    async fn test_open_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.html"), "<p>hi</p>\n").unwrap();

        let root = DocumentRoot::new(dir.path());
        let resource = root.open("/page.html").await;
        assert_eq!(resource.status(), ResourceStatus::Found);
        assert!(matches!(resource, Resource::Found { len: 10, .. }));
    }

    #[tokio::test]
    async fn test_open_missing_empty_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let root = DocumentRoot::new(dir.path());
        assert_eq!(root.open("/missing.html").await.status(), ResourceStatus::NotFound);
        assert_eq!(root.open("").await.status(), ResourceStatus::NotFound);
        assert_eq!(root.open("/sub").await.status(), ResourceStatus::NotFound);
        assert_eq!(root.open("/").await.status(), ResourceStatus::NotFound);
    }
}
