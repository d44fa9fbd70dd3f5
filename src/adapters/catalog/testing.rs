//! Test suite for the generated app: Jest unit tests, Playwright e2e flow,
//! and both runners' configuration.

use super::render::render;
use crate::domain::{DomainError, ScaffoldFile, Section, TemplateContext};

const AUTH_TEST: &str = include_str!("templates/testing/auth.test.js");
const DASHBOARD_TEST: &str = include_str!("templates/testing/dashboard.test.js");
const PLAYWRIGHT_CONFIG: &str = include_str!("templates/testing/playwright.config.js");
const E2E_FLOW: &str = include_str!("templates/testing/orbit-flow.spec.js");
const JEST_CONFIG: &str = include_str!("templates/testing/jest.config.js");
const JEST_SETUP: &str = include_str!("templates/testing/jest.setup.js");

pub fn files(ctx: &TemplateContext) -> Result<Vec<ScaffoldFile>, DomainError> {
    let section = Section::Testing;
    Ok(vec![
        ScaffoldFile::new("tests/auth.test.js", render(AUTH_TEST, ctx)?, section),
        ScaffoldFile::new(
            "tests/dashboard.test.js",
            render(DASHBOARD_TEST, ctx)?,
            section,
        ),
        ScaffoldFile::new(
            "playwright.config.js",
            render(PLAYWRIGHT_CONFIG, ctx)?,
            section,
        ),
        ScaffoldFile::new("e2e/orbit-flow.spec.js", render(E2E_FLOW, ctx)?, section),
        ScaffoldFile::new("jest.config.js", render(JEST_CONFIG, ctx)?, section),
        ScaffoldFile::new("jest.setup.js", render(JEST_SETUP, ctx)?, section),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jest_and_playwright_configs_are_present() {
        let ctx = TemplateContext::default();
        let files = files(&ctx).unwrap();

        let jest = files.iter().find(|f| f.path == "jest.config.js").unwrap();
        assert!(jest.content.contains("next/jest"));
        assert!(jest.content.contains("setupFilesAfterEnv"));

        let playwright = files
            .iter()
            .find(|f| f.path == "playwright.config.js")
            .unwrap();
        assert!(playwright.content.contains("defineConfig"));
        assert!(playwright.content.contains("http://localhost:3000"));
    }

    #[test]
    fn unit_tests_mock_render_providers() {
        let ctx = TemplateContext::default();
        let files = files(&ctx).unwrap();
        let auth = files.iter().find(|f| f.path == "tests/auth.test.js").unwrap();

        // mocked provider props use JSX object literals
        assert!(auth.content.contains("value={{"));
        assert!(auth.content.contains("@testing-library/react"));
    }
}
