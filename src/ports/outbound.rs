//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, ManifestEntry, ScaffoldFile, Section, TemplateContext};

/// Template catalog. Source of every payload the generator can emit.
pub trait CatalogPort: Send + Sync {
    /// Number of files a section contributes. Used for menus and
    /// progress sizing; summary payloads count too.
    fn section_len(&self, section: Section) -> usize;

    /// Rendered files for the requested sections, in emission order.
    ///
    /// Duplicate section requests collapse; the project summary (when
    /// requested) is computed from the full catalog and returned last.
    fn files(
        &self,
        sections: &[Section],
        ctx: &TemplateContext,
    ) -> Result<Vec<ScaffoldFile>, DomainError>;
}

/// File sink. Writes rendered payloads below a fixed output root.
#[async_trait::async_trait]
pub trait FileSinkPort: Send + Sync {
    /// Write `content` at `rel_path`, creating parent directories.
    /// The replace is atomic: temp file in the target directory, then rename.
    async fn write(&self, rel_path: &str, content: &str) -> Result<(), DomainError>;

    /// Current content at `rel_path`. Ok(None) when the file is absent.
    async fn read(&self, rel_path: &str) -> Result<Option<String>, DomainError>;

    /// Create a directory (and parents) below the output root.
    async fn ensure_dir(&self, rel_path: &str) -> Result<(), DomainError>;
}

/// Manifest port. Tracks what the generator wrote (content hashes) so
/// reruns can tell their own output apart from user edits.
#[async_trait::async_trait]
pub trait ManifestPort: Send + Sync {
    /// Entry recorded for a path. Returns None for unmanaged files.
    async fn get(&self, path: &str) -> Result<Option<ManifestEntry>, DomainError>;

    /// Record a file after a successful write. In-memory until [`flush`].
    ///
    /// [`flush`]: ManifestPort::flush
    async fn record(&self, path: &str, entry: ManifestEntry) -> Result<(), DomainError>;

    /// Persist recorded entries. Called once per generation run; a run
    /// never records a file it did not write, so the saved manifest can
    /// only understate what is on disk, and reruns adopt the rest.
    async fn flush(&self) -> Result<(), DomainError>;

    /// All managed paths with their entries, sorted by path.
    async fn entries(&self) -> Result<Vec<(String, ManifestEntry)>, DomainError>;
}
