//! Shared UI primitives: loading spinner and the toast notification rack.

use super::render::render;
use crate::domain::{DomainError, ScaffoldFile, Section, TemplateContext};

const LOADING_SPINNER: &str = include_str!("templates/ui_kit/LoadingSpinner.js");
const TOASTER: &str = include_str!("templates/ui_kit/Toaster.js");

pub fn files(ctx: &TemplateContext) -> Result<Vec<ScaffoldFile>, DomainError> {
    let section = Section::UiKit;
    Ok(vec![
        ScaffoldFile::new(
            "components/ui/LoadingSpinner.js",
            render(LOADING_SPINNER, ctx)?,
            section,
        ),
        ScaffoldFile::new("components/ui/Toaster.js", render(TOASTER, ctx)?, section),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_spinner_and_toaster() {
        let ctx = TemplateContext::default();
        let files = files(&ctx).unwrap();

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            ["components/ui/LoadingSpinner.js", "components/ui/Toaster.js"]
        );
    }
}
