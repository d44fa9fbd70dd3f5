//! Template catalog adapter. The payload source for everything the
//! generator can write.
//!
//! Each submodule owns one section of the output tree and returns its
//! rendered files; [`Catalog`] implements `CatalogPort` by assembling them
//! in emission order. Payload text lives under `templates/` and is embedded
//! at compile time; JSON payloads are built with `serde_json` so computed
//! fields (project identity, file inventory) stay consistent.

pub mod render;

mod app_shell;
mod cloud_functions;
mod docs;
mod firebase;
mod modules;
mod project_config;
mod summary;
mod testing;
mod ui_kit;
mod workflows;

use tracing::warn;

use crate::domain::{DomainError, ScaffoldFile, Section, TemplateContext};
use crate::ports::CatalogPort;

/// Pretty-print with two-space indentation, the format every emitted JSON
/// file uses.
pub(crate) fn json_pretty(value: &serde_json::Value) -> Result<String, DomainError> {
    serde_json::to_string_pretty(value).map_err(|e| DomainError::Catalog(e.to_string()))
}

#[derive(Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    fn section_files(
        section: Section,
        ctx: &TemplateContext,
    ) -> Result<Vec<ScaffoldFile>, DomainError> {
        match section {
            Section::ProjectConfig => project_config::files(ctx),
            Section::Firebase => firebase::files(ctx),
            Section::AppShell => app_shell::files(ctx),
            Section::Modules => modules::files(ctx),
            Section::UiKit => ui_kit::files(ctx),
            Section::CloudFunctions => cloud_functions::files(ctx),
            Section::Testing => testing::files(ctx),
            Section::Workflows => workflows::files(ctx),
            Section::Docs => docs::files(ctx),
            // summary depends on the rest of the catalog, built in files()
            Section::Summary => Err(DomainError::Catalog(
                "summary is derived from the full catalog".to_string(),
            )),
        }
    }

    /// Every section except the summary, in emission order.
    fn non_summary_catalog(ctx: &TemplateContext) -> Result<Vec<ScaffoldFile>, DomainError> {
        let mut out = Vec::new();
        for section in Section::ALL {
            if section != Section::Summary {
                out.extend(Self::section_files(section, ctx)?);
            }
        }
        Ok(out)
    }
}

impl CatalogPort for Catalog {
    fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Summary => 2,
            other => match Self::section_files(other, &TemplateContext::default()) {
                Ok(files) => files.len(),
                Err(e) => {
                    warn!(section = %other, error = %e, "section failed to render, counting 0 files");
                    0
                }
            },
        }
    }

    fn files(
        &self,
        sections: &[Section],
        ctx: &TemplateContext,
    ) -> Result<Vec<ScaffoldFile>, DomainError> {
        let mut wanted = [false; Section::ALL.len()];
        for section in sections {
            wanted[section.order()] = true;
        }

        let mut out = Vec::new();
        for section in Section::ALL {
            if section == Section::Summary || !wanted[section.order()] {
                continue;
            }
            out.extend(Self::section_files(section, ctx)?);
        }

        if wanted[Section::Summary.order()] {
            // The inventory always describes the full scaffold, not just
            // the sections picked for this run.
            let full = Self::non_summary_catalog(ctx)?;
            out.extend(summary::files(ctx, &full)?);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const TOKEN_PREFIXES: [&str; 5] = [
        "{{project_",
        "{{firebase_",
        "{{hf_",
        "{{security_",
        "{{orbit_",
    ];

    fn full_catalog() -> Vec<ScaffoldFile> {
        Catalog::new()
            .files(&Section::ALL, &TemplateContext::default())
            .unwrap()
    }

    #[test]
    fn full_catalog_is_complete_and_unique() {
        let files = full_catalog();
        assert_eq!(files.len(), 44);

        let unique: HashSet<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(unique.len(), files.len());

        for file in &files {
            assert!(!file.path.starts_with('/'), "absolute path: {}", file.path);
            assert!(
                file.path.split('/').all(|c| !c.is_empty() && c != ".."),
                "unsafe path: {}",
                file.path
            );
        }

        // emission order follows section order
        let orders: Vec<usize> = files.iter().map(|f| f.section.order()).collect();
        let mut sorted = orders.clone();
        sorted.sort_unstable();
        assert_eq!(orders, sorted);
        assert_eq!(files.last().unwrap().path, "project-manifest.json");
    }

    #[test]
    fn section_lens_add_up() {
        let catalog = Catalog::new();
        let expected = [
            (Section::ProjectConfig, 4),
            (Section::Firebase, 4),
            (Section::AppShell, 9),
            (Section::Modules, 10),
            (Section::UiKit, 2),
            (Section::CloudFunctions, 4),
            (Section::Testing, 6),
            (Section::Workflows, 1),
            (Section::Docs, 2),
            (Section::Summary, 2),
        ];
        for (section, len) in expected {
            assert_eq!(catalog.section_len(section), len, "{section}");
        }
        let total: usize = Section::ALL.iter().map(|s| catalog.section_len(*s)).sum();
        assert_eq!(total, 44);
    }

    #[test]
    fn partial_selection_emits_only_requested_sections() {
        let catalog = Catalog::new();
        let files = catalog
            .files(&[Section::Modules], &TemplateContext::default())
            .unwrap();

        assert_eq!(files.len(), 10);
        assert!(files.iter().all(|f| f.section == Section::Modules));
    }

    #[test]
    fn summary_inventory_covers_full_catalog_even_when_alone() {
        let catalog = Catalog::new();
        let files = catalog
            .files(&[Section::Summary], &TemplateContext::default())
            .unwrap();
        assert_eq!(files.len(), 2);

        let manifest = files
            .iter()
            .find(|f| f.path == "project-manifest.json")
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&manifest.content).unwrap();
        let listed: Vec<&str> = parsed["files"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        // 42 non-summary files minus 3 hidden, plus the summary doc itself
        assert_eq!(listed.len(), 40);
        assert_eq!(parsed["total_files"], 40);
        assert!(listed.contains(&"package.json"));
        assert!(listed.contains(&"components/modules/AIChat.js"));
        assert!(listed.contains(&"PROJECT-SUMMARY.md"));
        assert!(!listed.contains(&".env.example"));
        assert!(!listed.contains(&".github/workflows/deploy.yml"));
        assert!(!listed.contains(&"functions/.eslintrc.js"));
        assert!(!listed.contains(&"project-manifest.json"));

        let mut sorted = listed.clone();
        sorted.sort_unstable();
        assert_eq!(listed, sorted);
    }

    #[test]
    fn duplicate_section_requests_collapse() {
        let catalog = Catalog::new();
        let files = catalog
            .files(
                &[Section::Docs, Section::Docs, Section::Docs],
                &TemplateContext::default(),
            )
            .unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn every_json_payload_parses() {
        for file in full_catalog() {
            if file.path.ends_with(".json") {
                serde_json::from_str::<serde_json::Value>(&file.content)
                    .unwrap_or_else(|e| panic!("{} is not valid JSON: {e}", file.path));
            }
        }
    }

    #[test]
    fn no_unresolved_tokens_in_rendered_output() {
        for file in full_catalog() {
            for prefix in TOKEN_PREFIXES {
                assert!(
                    !file.content.contains(prefix),
                    "unresolved token in {}",
                    file.path
                );
            }
        }
    }
}
