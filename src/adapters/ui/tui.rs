//! Implements InputPort. Inquire-based interactive menu.
//!
//! Drives the scaffold and verify services: full or per-section generation,
//! a dry plan preview, and a drift check over the output tree.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{Confirm, InquireError, MultiSelect, Select};

use crate::domain::{DomainError, OverwriteMode, ScaffoldStats, Section};
use crate::ports::{CatalogPort, InputPort};
use crate::usecases::{ScaffoldService, VerifyService};

use super::progress::ProgressBarReporter;

const MENU_GENERATE_ALL: &str = "Generate full project";
const MENU_GENERATE_SECTIONS: &str = "Generate selected sections";
const MENU_PREVIEW: &str = "Preview file plan";
const MENU_VERIFY: &str = "Verify output";
const MENU_QUIT: &str = "Quit";

const MENU: [&str; 5] = [
    MENU_GENERATE_ALL,
    MENU_GENERATE_SECTIONS,
    MENU_PREVIEW,
    MENU_VERIFY,
    MENU_QUIT,
];

/// Applies the blue/teal theme for all subsequent inquire prompts.
/// Call once at startup.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("»").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("➜").with_fg(Color::LightCyan))
        .with_selected_checkbox(Styled::new("[x]").with_fg(Color::LightGreen))
        .with_unselected_checkbox(Styled::new("[ ]"))
        .with_answer(StyleSheet::new().with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

/// Section plus its file count, for the multi-select listing.
struct SectionChoice {
    section: Section,
    files: usize,
}

impl std::fmt::Display for SectionChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.files == 1 { "file" } else { "files" };
        write!(f, "{} ({} {})", self.section.label(), self.files, noun)
    }
}

fn human_bytes(n: u64) -> String {
    if n < 1024 {
        format!("{n} B")
    } else if n < 1024 * 1024 {
        format!("{:.1} KiB", n as f64 / 1024.0)
    } else {
        format!("{:.1} MiB", n as f64 / (1024.0 * 1024.0))
    }
}

/// TUI adapter. Inquire prompts over the scaffold and verify services.
pub struct TuiInputPort {
    catalog: Arc<dyn CatalogPort>,
    scaffold: Arc<ScaffoldService>,
    verify: Arc<VerifyService>,
    output_dir: PathBuf,
    force_default: bool,
}

impl TuiInputPort {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        scaffold: Arc<ScaffoldService>,
        verify: Arc<VerifyService>,
        output_dir: PathBuf,
        force_default: bool,
    ) -> Self {
        Self {
            catalog,
            scaffold,
            verify,
            output_dir,
            force_default,
        }
    }

    /// Ask how to treat files with local edits. None = prompt cancelled.
    fn ask_mode(&self) -> Result<Option<OverwriteMode>, DomainError> {
        let answer = Confirm::new("Overwrite files that carry local edits?")
            .with_default(self.force_default)
            .with_help_message("No keeps edited files and reports them as conflicts")
            .prompt();
        match answer {
            Ok(true) => Ok(Some(OverwriteMode::Force)),
            Ok(false) => Ok(Some(OverwriteMode::Respect)),
            Err(InquireError::OperationCanceled) => Ok(None),
            Err(e) => Err(DomainError::Input(e.to_string())),
        }
    }

    async fn generate(&self, sections: &[Section]) -> Result<(), DomainError> {
        let Some(mode) = self.ask_mode()? else {
            return Ok(());
        };
        let progress = ProgressBarReporter::new();
        let stats = self.scaffold.generate(sections, mode, &progress).await?;
        self.print_stats(&stats);
        Ok(())
    }

    async fn generate_selected(&self) -> Result<(), DomainError> {
        let options: Vec<SectionChoice> = Section::ALL
            .iter()
            .map(|&section| SectionChoice {
                section,
                files: self.catalog.section_len(section),
            })
            .collect();

        let picked = match MultiSelect::new("Sections to generate", options).prompt() {
            Ok(picked) => picked,
            Err(InquireError::OperationCanceled) => return Ok(()),
            Err(e) => return Err(DomainError::Input(e.to_string())),
        };
        if picked.is_empty() {
            println!("  nothing selected");
            return Ok(());
        }

        let sections: Vec<Section> = picked.iter().map(|c| c.section).collect();
        self.generate(&sections).await
    }

    fn preview(&self) -> Result<(), DomainError> {
        let files = self.scaffold.plan(&Section::ALL)?;
        let ctx = self.scaffold.context();

        println!();
        println!("{} ({})", ctx.project_name, ctx.project_slug);
        println!();
        let mut current: Option<Section> = None;
        let mut total_bytes = 0u64;
        for file in &files {
            if current != Some(file.section) {
                println!("{}", file.section.label());
                current = Some(file.section);
            }
            println!("  {:>9}  {}", human_bytes(file.bytes() as u64), file.path);
            total_bytes += file.bytes() as u64;
        }
        println!();
        println!(
            "{} files, {} -> {}",
            files.len(),
            human_bytes(total_bytes),
            self.output_dir.display()
        );
        println!();
        Ok(())
    }

    async fn run_verify(&self) -> Result<(), DomainError> {
        let report = self.verify.verify().await?;

        println!();
        if report.total() == 0 {
            println!("  no managed files yet; generate the project first");
            println!();
            return Ok(());
        }
        println!(
            "  {} clean, {} drifted, {} missing (of {} managed files)",
            report.clean.len(),
            report.drifted.len(),
            report.missing.len(),
            report.total()
        );
        for path in &report.drifted {
            println!("  drifted: {path}");
        }
        for path in &report.missing {
            println!("  missing: {path}");
        }
        if report.is_clean() {
            println!("  output tree matches the last generation");
        }
        println!();
        Ok(())
    }

    fn print_stats(&self, stats: &ScaffoldStats) {
        println!();
        println!(
            "  {} files: {} created, {} updated, {} unchanged, {} conflicts ({} -> {})",
            stats.total(),
            stats.created,
            stats.updated,
            stats.unchanged,
            stats.conflicts,
            human_bytes(stats.bytes_written),
            self.output_dir.display()
        );
        for path in &stats.conflict_paths {
            println!("  kept local edits: {path}");
        }
        if stats.conflicts > 0 {
            println!("  re-run and choose overwrite to replace them");
        }
        println!();
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice = match Select::new("What do you want to do?", MENU.to_vec()).prompt() {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled)
                | Err(InquireError::OperationInterrupted) => break,
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            match choice {
                MENU_GENERATE_ALL => self.generate(&Section::ALL).await?,
                MENU_GENERATE_SECTIONS => self.generate_selected().await?,
                MENU_PREVIEW => self.preview()?,
                MENU_VERIFY => self.run_verify().await?,
                _ => break,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_bytes_picks_sane_units() {
        assert_eq!(human_bytes(512), "512 B");
        assert_eq!(human_bytes(2048), "2.0 KiB");
        assert_eq!(human_bytes(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn section_choice_pluralizes() {
        let one = SectionChoice {
            section: Section::Workflows,
            files: 1,
        };
        let many = SectionChoice {
            section: Section::Modules,
            files: 10,
        };
        assert_eq!(one.to_string(), "CI workflows (1 file)");
        assert_eq!(many.to_string(), "Feature modules (10 files)");
    }
}
