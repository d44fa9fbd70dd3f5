//! Main generation logic: plan -> compare against disk -> write -> record.
//!
//! - Hashes each planned payload and the current on-disk content
//! - Identical files are skipped (Unchanged)
//! - Files whose disk hash matches the manifest are ours to overwrite (Updated)
//! - Anything else carries local edits: skipped as a Conflict unless forced
//! - The manifest entry is recorded only after a successful write, and the
//!   manifest is saved to disk once per run, not per file

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::{
    DomainError, ManifestEntry, OverwriteMode, ScaffoldFile, ScaffoldStats, Section,
    TemplateContext, WriteOutcome,
};
use crate::ports::{CatalogPort, FileSinkPort, ManifestPort, ProgressPort};
use crate::shared::checksum::sha256_hex;

/// Directories the scaffold ships empty; created up front on every run.
const FIXED_DIRS: [&str; 3] = ["hooks", "utils", "docs"];

/// Scaffold service. Coordinates rendering, conflict detection and writes.
pub struct ScaffoldService {
    catalog: Arc<dyn CatalogPort>,
    sink: Arc<dyn FileSinkPort>,
    manifest: Arc<dyn ManifestPort>,
    ctx: TemplateContext,
}

impl ScaffoldService {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        sink: Arc<dyn FileSinkPort>,
        manifest: Arc<dyn ManifestPort>,
        ctx: TemplateContext,
    ) -> Self {
        Self {
            catalog,
            sink,
            manifest,
            ctx,
        }
    }

    pub fn context(&self) -> &TemplateContext {
        &self.ctx
    }

    /// Rendered files for the given sections, without touching disk.
    pub fn plan(&self, sections: &[Section]) -> Result<Vec<ScaffoldFile>, DomainError> {
        self.catalog.files(sections, &self.ctx)
    }

    /// Generate the selected sections into the output tree. Files are
    /// written sequentially in emission order; the summary pair is always
    /// last, so its inventory describes files that already exist.
    pub async fn generate(
        &self,
        sections: &[Section],
        mode: OverwriteMode,
        progress: &dyn ProgressPort,
    ) -> Result<ScaffoldStats, DomainError> {
        let files = self.plan(sections)?;
        if files.is_empty() {
            return Ok(ScaffoldStats::default());
        }

        for dir in FIXED_DIRS {
            self.sink.ensure_dir(dir).await?;
        }

        progress.begin(files.len() as u64);
        let mut stats = ScaffoldStats::default();
        for file in &files {
            let outcome = match self.write_one(file, mode).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    progress.finish();
                    // keep the entries for files this run did manage to write
                    if let Err(flush_err) = self.manifest.flush().await {
                        warn!(error = %flush_err, "manifest flush after aborted run");
                    }
                    return Err(e);
                }
            };
            stats.record(&file.path, outcome, file.bytes() as u64);
            progress.file_done(&file.path, outcome);
        }
        progress.finish();
        self.manifest.flush().await?;

        info!(
            created = stats.created,
            updated = stats.updated,
            unchanged = stats.unchanged,
            conflicts = stats.conflicts,
            bytes = stats.bytes_written,
            "scaffold run complete"
        );
        Ok(stats)
    }

    async fn write_one(
        &self,
        file: &ScaffoldFile,
        mode: OverwriteMode,
    ) -> Result<WriteOutcome, DomainError> {
        let desired = sha256_hex(&file.content);

        let Some(on_disk) = self.sink.read(&file.path).await? else {
            self.sink.write(&file.path, &file.content).await?;
            self.record(file, &desired).await?;
            return Ok(WriteOutcome::Created);
        };

        let disk_hash = sha256_hex(&on_disk);
        if disk_hash == desired {
            // Adopt files that match but predate the manifest (or were
            // written by an older run).
            let known = self.manifest.get(&file.path).await?;
            if known.map(|e| e.sha256) != Some(desired.clone()) {
                self.record(file, &desired).await?;
            }
            return Ok(WriteOutcome::Unchanged);
        }

        let ours = self
            .manifest
            .get(&file.path)
            .await?
            .is_some_and(|e| e.sha256 == disk_hash);

        if ours || mode == OverwriteMode::Force {
            self.sink.write(&file.path, &file.content).await?;
            self.record(file, &desired).await?;
            Ok(WriteOutcome::Updated)
        } else {
            warn!(
                path = %file.path,
                "local edits detected, keeping file (re-run with force to overwrite)"
            );
            Ok(WriteOutcome::Conflict)
        }
    }

    async fn record(&self, file: &ScaffoldFile, sha256: &str) -> Result<(), DomainError> {
        self.manifest
            .record(
                &file.path,
                ManifestEntry {
                    sha256: sha256.to_string(),
                    bytes: file.bytes() as u64,
                    section: file.section,
                    written_at: Utc::now(),
                },
            )
            .await
    }
}
