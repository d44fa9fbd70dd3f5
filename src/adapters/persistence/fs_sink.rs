//! Implements FileSinkPort. Writes scaffold files under a fixed output root.
//!
//! Every write is atomic (temp file + sync + rename) so an interrupted run
//! never leaves a half-written payload behind.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::domain::DomainError;
use crate::ports::FileSinkPort;

/// File-system sink rooted at the output directory.
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Join `rel_path` under the root, rejecting absolute paths and any
    /// `..` component so a payload path can never escape the output tree.
    fn resolve(&self, rel_path: &str) -> Result<PathBuf, DomainError> {
        if rel_path.is_empty() {
            return Err(DomainError::Sink("empty path".to_string()));
        }
        let rel = Path::new(rel_path);
        for component in rel.components() {
            match component {
                Component::Normal(_) => {}
                _ => {
                    return Err(DomainError::Sink(format!(
                        "path escapes output root: {rel_path}"
                    )));
                }
            }
        }
        Ok(self.root.join(rel))
    }
}

#[async_trait::async_trait]
impl FileSinkPort for FsSink {
    /// Atomic write-replace:
    /// 1. Write to a temp file next to the target
    /// 2. sync_all() to ensure flush to disk
    /// 3. Atomic rename to the target path
    async fn write(&self, rel_path: &str, content: &str) -> Result<(), DomainError> {
        let path = self.resolve(rel_path)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Sink(format!("create parent dirs: {}", e)))?;
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DomainError::Sink(format!("bad file name: {rel_path}")))?;
        let temp_path = path.with_file_name(format!("{file_name}.tmp"));

        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Sink(format!("create temp file: {}", e)))?;
        f.write_all(content.as_bytes())
            .await
            .map_err(|e| DomainError::Sink(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Sink(format!("sync temp file: {}", e)))?;
        drop(f); // close handle before rename

        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| DomainError::Sink(format!("atomic rename failed: {}", e)))?;

        debug!(path = rel_path, bytes = content.len(), "wrote file");
        Ok(())
    }

    async fn read(&self, rel_path: &str) -> Result<Option<String>, DomainError> {
        let path = self.resolve(rel_path)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Sink(e.to_string())),
        }
    }

    async fn ensure_dir(&self, rel_path: &str) -> Result<(), DomainError> {
        let path = self.resolve(rel_path)?;
        fs::create_dir_all(&path)
            .await
            .map_err(|e| DomainError::Sink(e.to_string()))
    }
}
