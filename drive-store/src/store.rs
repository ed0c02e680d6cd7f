//! File store contract and the temp-file artifact it hands out.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::warn;

/// A downloaded file in the bot's temp directory. Removing the file is tied
/// to drop, so cleanup holds on every exit path of the attachment step,
/// including a failed send.
#[derive(Debug)]
pub struct TempDownload {
    path: PathBuf,
    file_id: String,
}

impl TempDownload {
    pub fn new(path: PathBuf, file_id: String) -> Self {
        Self { path, file_id }
    }

    /// Local path of the fully-written file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Id of the stored file this artifact came from.
    pub fn file_id(&self) -> &str {
        &self.file_id
    }
}

impl Drop for TempDownload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove temp download"
                );
            }
        }
    }
}

/// Resolves a stored file reference to a locally-readable file.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// None on any resolution failure: malformed reference, metadata or
    /// media fetch failure. A returned artifact is fully written and
    /// readable at return time.
    async fn resolve_to_local_path(&self, reference: &str) -> Option<TempDownload>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_download_removes_file_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("confirmation.pdf");
        std::fs::write(&path, b"pdf bytes").unwrap();

        let download = TempDownload::new(path.clone(), "abc".to_string());
        assert!(path.exists());
        drop(download);
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_download_drop_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("already-gone.pdf");

        // Never created on disk; drop must not panic.
        let download = TempDownload::new(path, "abc".to_string());
        drop(download);
    }
}
