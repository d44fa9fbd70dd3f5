//! Domain entities. Pure data structures for the scaffolding core.
//!
//! No filesystem/terminal types here — these are mapped from adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Logical group of generated files. Variant order is emission order;
/// `Summary` is computed from the rest of the plan and always comes last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    ProjectConfig,
    Firebase,
    AppShell,
    Modules,
    UiKit,
    CloudFunctions,
    Testing,
    Workflows,
    Docs,
    Summary,
}

impl Section {
    /// All sections in emission order.
    pub const ALL: [Section; 10] = [
        Section::ProjectConfig,
        Section::Firebase,
        Section::AppShell,
        Section::Modules,
        Section::UiKit,
        Section::CloudFunctions,
        Section::Testing,
        Section::Workflows,
        Section::Docs,
        Section::Summary,
    ];

    /// Human label for menus and the preview listing.
    pub fn label(self) -> &'static str {
        match self {
            Section::ProjectConfig => "Project configuration",
            Section::Firebase => "Firebase rules & config",
            Section::AppShell => "App shell & auth",
            Section::Modules => "Feature modules",
            Section::UiKit => "UI kit",
            Section::CloudFunctions => "Cloud Functions",
            Section::Testing => "Test suite",
            Section::Workflows => "CI workflows",
            Section::Docs => "Documentation",
            Section::Summary => "Project summary",
        }
    }

    /// Position within [`Section::ALL`]; used to keep plans in emission order.
    pub fn order(self) -> usize {
        Section::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or(Section::ALL.len())
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single file of the generated project: relative path plus rendered content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldFile {
    pub path: String,
    pub content: String,
    pub section: Section,
}

impl ScaffoldFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>, section: Section) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            section,
        }
    }

    pub fn bytes(&self) -> usize {
        self.content.len()
    }

    /// True for dot-files and files under dot-directories. The emitted
    /// `project-manifest.json` excludes these (e.g. `.env.example`,
    /// `.github/workflows/deploy.yml`).
    pub fn is_hidden(&self) -> bool {
        self.path
            .split('/')
            .any(|component| component.starts_with('.'))
    }
}

/// How generation treats planned files whose on-disk content differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteMode {
    /// Keep user-edited files; report them as conflicts.
    Respect,
    /// Overwrite everything with the rendered payload.
    Force,
}

/// Outcome of writing (or skipping) one planned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    /// File did not exist and was written.
    Created,
    /// File existed with our previous output and was rewritten.
    Updated,
    /// File already matches the rendered payload.
    Unchanged,
    /// File differs and carries local edits; skipped (Respect mode).
    Conflict,
}

/// Counters for a single generation run. Conflicted paths are kept so the
/// UI can list which files were skipped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScaffoldStats {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub conflicts: usize,
    pub conflict_paths: Vec<String>,
    /// Bytes actually written (created + updated files only).
    pub bytes_written: u64,
}

impl ScaffoldStats {
    pub fn record(&mut self, path: &str, outcome: WriteOutcome, bytes: u64) {
        match outcome {
            WriteOutcome::Created => {
                self.created += 1;
                self.bytes_written += bytes;
            }
            WriteOutcome::Updated => {
                self.updated += 1;
                self.bytes_written += bytes;
            }
            WriteOutcome::Unchanged => self.unchanged += 1,
            WriteOutcome::Conflict => {
                self.conflicts += 1;
                self.conflict_paths.push(path.to_string());
            }
        }
    }

    pub fn total(&self) -> usize {
        self.created + self.updated + self.unchanged + self.conflicts
    }
}

/// Manifest entry for a managed file: what the generator last wrote there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Hex SHA-256 of the written content.
    pub sha256: String,
    pub bytes: u64,
    pub section: Section,
    pub written_at: DateTime<Utc>,
}

/// Drift status of one manifest-tracked file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyStatus {
    Clean,
    Drifted,
    Missing,
}

/// Drift report over the whole output tree. Paths are sorted.
#[derive(Debug, Default)]
pub struct VerifyReport {
    pub clean: Vec<String>,
    pub drifted: Vec<String>,
    pub missing: Vec<String>,
}

impl VerifyReport {
    pub fn record(&mut self, path: String, status: VerifyStatus) {
        match status {
            VerifyStatus::Clean => self.clean.push(path),
            VerifyStatus::Drifted => self.drifted.push(path),
            VerifyStatus::Missing => self.missing.push(path),
        }
    }

    pub fn total(&self) -> usize {
        self.clean.len() + self.drifted.len() + self.missing.len()
    }

    pub fn is_clean(&self) -> bool {
        self.drifted.is_empty() && self.missing.is_empty()
    }
}

/// Values substituted into `{{key}}` payload tokens.
///
/// Defaults are the stock ORBIT identity with obviously-fake credentials;
/// real Firebase values come from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    pub project_name: String,
    pub project_slug: String,
    pub project_description: String,
    pub firebase_api_key: String,
    pub firebase_auth_domain: String,
    pub firebase_project_id: String,
    pub firebase_storage_bucket: String,
    pub firebase_messaging_sender_id: String,
    pub firebase_app_id: String,
    pub firebase_measurement_id: String,
    pub hf_api_key: String,
    pub security_email: String,
}

impl Default for TemplateContext {
    fn default() -> Self {
        Self {
            project_name: "ORBIT AI".to_string(),
            project_slug: "orbit-ai".to_string(),
            project_description: "All-in-One Student Productivity & Skill Ecosystem".to_string(),
            firebase_api_key: "your-firebase-api-key".to_string(),
            firebase_auth_domain: "orbit-ai-demo.firebaseapp.com".to_string(),
            firebase_project_id: "orbit-ai-demo".to_string(),
            firebase_storage_bucket: "orbit-ai-demo.firebasestorage.app".to_string(),
            firebase_messaging_sender_id: "000000000000".to_string(),
            firebase_app_id: "1:000000000000:web:0000000000000000000000".to_string(),
            firebase_measurement_id: "G-XXXXXXXXXX".to_string(),
            hf_api_key: "hf_your-hugging-face-api-key".to_string(),
            security_email: "security@orbitai.dev".to_string(),
        }
    }
}

impl TemplateContext {
    /// Value for a placeholder key. None when the key is not known.
    pub fn value(&self, key: &str) -> Option<&str> {
        match key {
            "project_name" => Some(&self.project_name),
            "project_slug" => Some(&self.project_slug),
            "project_description" => Some(&self.project_description),
            "firebase_api_key" => Some(&self.firebase_api_key),
            "firebase_auth_domain" => Some(&self.firebase_auth_domain),
            "firebase_project_id" => Some(&self.firebase_project_id),
            "firebase_storage_bucket" => Some(&self.firebase_storage_bucket),
            "firebase_messaging_sender_id" => Some(&self.firebase_messaging_sender_id),
            "firebase_app_id" => Some(&self.firebase_app_id),
            "firebase_measurement_id" => Some(&self.firebase_measurement_id),
            "hf_api_key" => Some(&self.hf_api_key),
            "security_email" => Some(&self.security_email),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_paths_follow_dot_rule() {
        let visible = ScaffoldFile::new("app/layout.js", "", Section::AppShell);
        let dot_file = ScaffoldFile::new(".env.example", "", Section::ProjectConfig);
        let dot_dir = ScaffoldFile::new(".github/workflows/deploy.yml", "", Section::Workflows);

        assert!(!visible.is_hidden());
        assert!(dot_file.is_hidden());
        assert!(dot_dir.is_hidden());
    }

    #[test]
    fn stats_count_bytes_for_writes_only() {
        let mut stats = ScaffoldStats::default();
        stats.record("package.json", WriteOutcome::Created, 10);
        stats.record("app/page.js", WriteOutcome::Updated, 5);
        stats.record("app/layout.js", WriteOutcome::Unchanged, 100);
        stats.record("firestore.rules", WriteOutcome::Conflict, 100);

        assert_eq!(stats.total(), 4);
        assert_eq!(stats.bytes_written, 15);
        assert_eq!(stats.conflicts, 1);
        assert_eq!(stats.conflict_paths, ["firestore.rules"]);
    }

    #[test]
    fn sections_enumerate_in_emission_order() {
        assert_eq!(Section::ALL[0], Section::ProjectConfig);
        assert_eq!(Section::ALL[Section::ALL.len() - 1], Section::Summary);
        assert!(Section::AppShell.order() < Section::Testing.order());
    }

    #[test]
    fn context_resolves_known_keys_only() {
        let ctx = TemplateContext::default();
        assert_eq!(ctx.value("project_name"), Some("ORBIT AI"));
        assert_eq!(ctx.value("project_slug"), Some("orbit-ai"));
        assert_eq!(ctx.value("no_such_key"), None);
    }
}
