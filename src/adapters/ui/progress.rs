//! Implements ProgressPort with an indicatif bar.

use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::WriteOutcome;
use crate::ports::ProgressPort;

/// Short tag shown next to the current path.
fn outcome_tag(outcome: WriteOutcome) -> &'static str {
    match outcome {
        WriteOutcome::Created => "new",
        WriteOutcome::Updated => "upd",
        WriteOutcome::Unchanged => "ok ",
        WriteOutcome::Conflict => "SKIP",
    }
}

/// Terminal progress bar for generation runs. One bar per run; `begin`
/// replaces any previous bar.
pub struct ProgressBarReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressBarReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }
}

impl Default for ProgressBarReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressPort for ProgressBarReporter {
    fn begin(&self, total_files: u64) {
        let bar = ProgressBar::new(total_files);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .expect("progress bar template")
            .progress_chars("=>-"),
        );
        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(bar);
        }
    }

    fn file_done(&self, path: &str, outcome: WriteOutcome) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(bar) = guard.as_ref() {
                bar.set_message(format!("{} {}", outcome_tag(outcome), path));
                bar.inc(1);
            }
        }
    }

    fn finish(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(bar) = guard.take() {
                bar.finish_and_clear();
            }
        }
    }
}

/// No-op reporter for quiet contexts and tests.
pub struct NoopProgress;

impl ProgressPort for NoopProgress {
    fn begin(&self, _total_files: u64) {}
    fn file_done(&self, _path: &str, _outcome: WriteOutcome) {}
    fn finish(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporter_survives_full_cycle_without_terminal() {
        let reporter = ProgressBarReporter::new();
        reporter.begin(3);
        reporter.file_done("package.json", WriteOutcome::Created);
        reporter.file_done("app/layout.js", WriteOutcome::Unchanged);
        reporter.file_done("firestore.rules", WriteOutcome::Conflict);
        reporter.finish();
        // finishing twice is harmless
        reporter.finish();
    }
}
