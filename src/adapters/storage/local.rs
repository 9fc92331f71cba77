//! Local directory storage

use crate::config::schema::StorageConfig;
use crate::domain::StorageError;
use std::path::{Path, PathBuf};

/// Storage rooted at a local directory
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create storage rooted at the configured directory
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: PathBuf::from(&config.root),
        }
    }

    /// Create storage rooted at an explicit path
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Fetch a stored file's bytes by name
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` for names containing path separators or
    /// traversal components, `NotFound` if no such file exists, and `Io`
    /// for other read failures.
    pub async fn fetch(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let name = sanitize_name(name)?;
        let path = self.root.join(name);

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    /// Classify a file's MIME type from its bytes, falling back to the
    /// file-name extension
    pub fn mime_type(name: &str, bytes: &[u8]) -> String {
        if let Some(mime) = sniff_magic(bytes) {
            return mime.to_string();
        }

        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("txt") | Some("log") => "text/plain",
            Some("md") | Some("markdown") => "text/markdown",
            Some("csv") => "text/csv",
            Some("json") => "application/json",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            _ => "application/octet-stream",
        }
        .to_string()
    }
}

/// Reject names that could escape the storage root
fn sanitize_name(name: &str) -> Result<&str, StorageError> {
    if name.is_empty() {
        return Err(StorageError::InvalidName("empty name".to_string()));
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(name)
}

/// Identify well-known image formats by magic bytes
fn sniff_magic(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a]) {
        return Some("image/png");
    }
    if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
        return Some("image/jpeg");
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return Some("image/gif");
    }
    if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_rejects_traversal() {
        assert!(sanitize_name("../etc/passwd").is_err());
        assert!(sanitize_name("a/b.txt").is_err());
        assert!(sanitize_name("a\\b.txt").is_err());
        assert!(sanitize_name("").is_err());
        assert!(sanitize_name("report.txt").is_ok());
    }

    #[test]
    fn test_magic_bytes_win_over_extension() {
        let png = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00];
        assert_eq!(LocalStorage::mime_type("photo.txt", &png), "image/png");
    }

    #[test]
    fn test_extension_fallback() {
        assert_eq!(LocalStorage::mime_type("notes.txt", b"hello"), "text/plain");
        assert_eq!(
            LocalStorage::mime_type("notes.md", b"# title"),
            "text/markdown"
        );
        assert_eq!(
            LocalStorage::mime_type("blob.bin", &[0x00, 0x01]),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_jpeg_sniffing() {
        let jpeg = [0xff, 0xd8, 0xff, 0xe0];
        assert_eq!(LocalStorage::mime_type("x", &jpeg), "image/jpeg");
    }

    #[tokio::test]
    async fn test_fetch_roundtrip_and_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("note.txt"), b"contents").unwrap();

        let storage = LocalStorage::with_root(dir.path());
        let bytes = storage.fetch("note.txt").await.unwrap();
        assert_eq!(bytes, b"contents");

        let missing = storage.fetch("missing.txt").await;
        assert!(matches!(missing, Err(StorageError::NotFound(_))));
    }
}
