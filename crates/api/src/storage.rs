//! File store for uploads.
//!
//! Handlers never keep file bytes: uploads are written under the configured
//! root directory and only the stored name plus a stable web path are
//! persisted in the database. Stored names are prefixed with a UUID so
//! collisions between uploads with the same original name are impossible.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Metadata of a stored file, ready for persistence.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// The original, client-supplied file name.
    pub file_name: String,
    /// Stable web path under which the file is served (e.g.
    /// `/uploads/documents/<uuid>_<name>`).
    pub file_path: String,
}

/// Writes uploaded bytes to disk under a root directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Save `bytes` under `subdir`, returning the stored metadata.
    ///
    /// The original name is sanitized to its final path component before
    /// use, so a crafted filename cannot escape the store.
    pub async fn save(
        &self,
        subdir: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> std::io::Result<StoredFile> {
        let safe_name = sanitize_file_name(original_name);
        let stored_name = format!("{}_{safe_name}", Uuid::new_v4());

        let dir = self.root.join(subdir);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&stored_name), bytes).await?;

        Ok(StoredFile {
            file_name: safe_name,
            file_path: format!("/uploads/{subdir}/{stored_name}"),
        })
    }
}

/// Strip any directory components from a client-supplied file name.
fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file");
    base.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_sanitized() {
        assert_eq!(sanitize_file_name("plan.pdf"), "plan.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("dir/nested/x.txt"), "x.txt");
    }

    #[tokio::test]
    async fn save_writes_bytes_and_returns_web_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        let stored = store
            .save("documents", "intyg.pdf", b"%PDF-1.4")
            .await
            .expect("save should succeed");

        assert_eq!(stored.file_name, "intyg.pdf");
        assert!(stored.file_path.starts_with("/uploads/documents/"));
        assert!(stored.file_path.ends_with("_intyg.pdf"));

        let on_disk = dir
            .path()
            .join("documents")
            .join(stored.file_path.rsplit('/').next().unwrap());
        let bytes = tokio::fs::read(on_disk).await.expect("file must exist");
        assert_eq!(bytes, b"%PDF-1.4");
    }
}
