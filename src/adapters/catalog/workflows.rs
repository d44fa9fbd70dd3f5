//! GitHub Actions workflow: lint, unit tests, e2e, then Firebase deploy.

use super::render::render;
use crate::domain::{DomainError, ScaffoldFile, Section, TemplateContext};

const DEPLOY_YML: &str = include_str!("templates/workflows/deploy.yml");

pub fn files(ctx: &TemplateContext) -> Result<Vec<ScaffoldFile>, DomainError> {
    Ok(vec![ScaffoldFile::new(
        ".github/workflows/deploy.yml",
        render(DEPLOY_YML, ctx)?,
        Section::Workflows,
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_keeps_secrets_expressions_and_project_id() {
        let mut ctx = TemplateContext::default();
        ctx.firebase_project_id = "campus-hub-prod".to_string();

        let files = files(&ctx).unwrap();
        let deploy = &files[0];

        assert!(deploy.path.starts_with(".github/"));
        // Actions expressions are not placeholders and must survive verbatim
        assert!(deploy.content.contains("${{ secrets.FIREBASE_SERVICE_ACCOUNT }}"));
        assert!(deploy.content.contains("projectId: campus-hub-prod"));
    }
}
