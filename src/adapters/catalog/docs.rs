//! Repository documentation: security policy and contribution guide.

use super::render::render;
use crate::domain::{DomainError, ScaffoldFile, Section, TemplateContext};

const SECURITY: &str = include_str!("templates/docs/SECURITY.md");
const CONTRIBUTING: &str = include_str!("templates/docs/CONTRIBUTING.md");

pub fn files(ctx: &TemplateContext) -> Result<Vec<ScaffoldFile>, DomainError> {
    let section = Section::Docs;
    Ok(vec![
        ScaffoldFile::new("SECURITY.md", render(SECURITY, ctx)?, section),
        ScaffoldFile::new("CONTRIBUTING.md", render(CONTRIBUTING, ctx)?, section),
    ])
}
