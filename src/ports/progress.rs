//! Progress outbound port. Streams per-file pipeline progress to the UI.

use crate::domain::WriteOutcome;

/// Port for reporting generation progress.
///
/// Implemented by the terminal progress bar. Use cases call it for every
/// planned file; quiet contexts (tests) plug in a no-op implementation.
pub trait ProgressPort: Send + Sync {
    /// A run is starting with `total_files` planned writes.
    fn begin(&self, total_files: u64);

    /// One file finished with the given outcome.
    fn file_done(&self, path: &str, outcome: WriteOutcome);

    /// The run is over; release the display.
    fn finish(&self);
}
