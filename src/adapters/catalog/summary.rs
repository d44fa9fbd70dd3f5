//! Project summary: the PROJECT-SUMMARY.md document and the computed
//! `project-manifest.json` file inventory.
//!
//! The inventory mirrors a directory walk over the finished scaffold:
//! dot-files and dot-directories are excluded, the summary document itself
//! is listed, the manifest file is not (it is written last).

use serde_json::json;

use super::{json_pretty, render::render};
use crate::domain::{DomainError, ScaffoldFile, Section, TemplateContext};

const PROJECT_SUMMARY: &str = include_str!("templates/docs/PROJECT-SUMMARY.md");

pub const SUMMARY_PATH: &str = "PROJECT-SUMMARY.md";
pub const MANIFEST_PATH: &str = "project-manifest.json";

/// Build the summary pair from the full catalog (`rest` holds every other
/// section's files, regardless of which sections were selected for writing).
pub fn files(
    ctx: &TemplateContext,
    rest: &[ScaffoldFile],
) -> Result<Vec<ScaffoldFile>, DomainError> {
    let section = Section::Summary;
    Ok(vec![
        ScaffoldFile::new(SUMMARY_PATH, render(PROJECT_SUMMARY, ctx)?, section),
        ScaffoldFile::new(MANIFEST_PATH, project_manifest(ctx, rest)?, section),
    ])
}

fn project_manifest(ctx: &TemplateContext, rest: &[ScaffoldFile]) -> Result<String, DomainError> {
    let mut listed: Vec<&str> = rest
        .iter()
        .filter(|f| !f.is_hidden())
        .map(|f| f.path.as_str())
        .collect();
    listed.push(SUMMARY_PATH);
    listed.sort_unstable();
    listed.dedup();

    let value = json!({
        "project_name": ctx.project_name,
        "description": ctx.project_description,
        "total_files": listed.len(),
        "files": listed,
        "key_technologies": [
            "Next.js 14",
            "React 18",
            "Tailwind CSS",
            "Firebase (Auth, Firestore, Storage, Functions)",
            "Hugging Face API",
            "Monaco Editor",
            "Web Speech API",
            "Jest & Playwright Testing"
        ],
        "main_features": [
            "Google OAuth Authentication",
            "AI Resume Builder",
            "Document Designer",
            "Code IDE with AI Fixes",
            "Voice Assistant",
            "Real-time Chat",
            "Invoice Generator",
            "Portfolio Generator"
        ]
    });
    json_pretty(&value)
}
