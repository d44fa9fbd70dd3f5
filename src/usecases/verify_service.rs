//! Drift check: compare every manifest-tracked file against the output tree.
//!
//! Read-only. Reports which files still match what the generator wrote,
//! which were edited, and which are gone.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{DomainError, VerifyReport, VerifyStatus};
use crate::ports::{FileSinkPort, ManifestPort};
use crate::shared::checksum::sha256_hex;

pub struct VerifyService {
    sink: Arc<dyn FileSinkPort>,
    manifest: Arc<dyn ManifestPort>,
}

impl VerifyService {
    pub fn new(sink: Arc<dyn FileSinkPort>, manifest: Arc<dyn ManifestPort>) -> Self {
        Self { sink, manifest }
    }

    pub async fn verify(&self) -> Result<VerifyReport, DomainError> {
        let mut report = VerifyReport::default();

        for (path, entry) in self.manifest.entries().await? {
            let on_disk = self
                .sink
                .read(&path)
                .await
                .map_err(|e| DomainError::Verify(format!("{path}: {e}")))?;
            let status = match on_disk {
                None => {
                    warn!(path = %path, "managed file missing");
                    VerifyStatus::Missing
                }
                Some(content) if sha256_hex(&content) == entry.sha256 => VerifyStatus::Clean,
                Some(_) => {
                    warn!(path = %path, "managed file drifted from generated content");
                    VerifyStatus::Drifted
                }
            };
            report.record(path, status);
        }

        report.clean.sort_unstable();
        report.drifted.sort_unstable();
        report.missing.sort_unstable();

        info!(
            clean = report.clean.len(),
            drifted = report.drifted.len(),
            missing = report.missing.len(),
            "verify complete"
        );
        Ok(report)
    }
}
