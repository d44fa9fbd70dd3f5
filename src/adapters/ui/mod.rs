pub mod banner;
pub mod progress;
pub mod tui;

/// Prints the startup banner and installs the cyan prompt theme used by
/// every inquire dialog. Call once, right after tracing is initialized.
pub fn init_ui() {
    banner::print_welcome();
    tui::apply_theme();
}
