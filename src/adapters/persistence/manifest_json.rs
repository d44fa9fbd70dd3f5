//! Implements ManifestPort using a JSON file.
//!
//! Tracks the content hash of every file the generator wrote, keyed by
//! relative path. Reruns compare against these hashes to tell their own
//! output apart from user edits.
//!
//! Records accumulate in the in-memory cache; `flush` writes them out in
//! a single atomic save per generation run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::domain::{DomainError, ManifestEntry};
use crate::ports::ManifestPort;

/// On-disk shape. BTreeMap keeps the saved file diff-friendly.
#[derive(Debug, Serialize, Deserialize)]
struct ManifestData {
    version: u32,
    generated_with: String,
    entries: BTreeMap<String, ManifestEntry>,
}

impl Default for ManifestData {
    fn default() -> Self {
        Self {
            version: 1,
            generated_with: env!("CARGO_PKG_VERSION").to_string(),
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file-based manifest storage.
pub struct ManifestJson {
    path: PathBuf,
    cache: tokio::sync::RwLock<ManifestData>,
}

impl ManifestJson {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: tokio::sync::RwLock::new(ManifestData::default()),
        }
    }

    /// Load the manifest from disk. A missing file is a first run; a corrupt
    /// one degrades to empty (every file then shows up as a conflict rather
    /// than being silently overwritten).
    pub async fn load(&self) -> Result<(), DomainError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(data) => data,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "manifest unreadable, starting empty");
                    ManifestData::default()
                }
            },
            Err(_) => ManifestData::default(),
        };
        *self.cache.write().await = data;
        Ok(())
    }

    /// Atomic save using the write-replace pattern:
    /// 1. Write to temp file
    /// 2. sync_all() to ensure flush to disk
    /// 3. Atomic rename to target path
    async fn save(&self) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Manifest(format!("create manifest dir: {}", e)))?;
        }
        let json = {
            let mut data = self.cache.write().await;
            data.generated_with = env!("CARGO_PKG_VERSION").to_string();
            serde_json::to_string_pretty(&*data)
                .map_err(|e| DomainError::Manifest(e.to_string()))?
        };

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Manifest(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Manifest(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Manifest(format!("sync temp file: {}", e)))?;
        drop(f); // close handle before rename

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Manifest(format!("atomic rename failed: {}", e)))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ManifestPort for ManifestJson {
    async fn get(&self, path: &str) -> Result<Option<ManifestEntry>, DomainError> {
        let cache = self.cache.read().await;
        Ok(cache.entries.get(path).cloned())
    }

    async fn record(&self, path: &str, entry: ManifestEntry) -> Result<(), DomainError> {
        let mut cache = self.cache.write().await;
        cache.entries.insert(path.to_string(), entry);
        Ok(())
    }

    async fn flush(&self) -> Result<(), DomainError> {
        self.save().await
    }

    async fn entries(&self) -> Result<Vec<(String, ManifestEntry)>, DomainError> {
        let cache = self.cache.read().await;
        Ok(cache
            .entries
            .iter()
            .map(|(path, entry)| (path.clone(), entry.clone()))
            .collect())
    }
}
