//! Next.js app shell: root layout, entry page, global styles, the auth
//! context, Firebase bootstrap, and the dashboard chrome (sidebar, top bar).

use super::render::render;
use crate::domain::{DomainError, ScaffoldFile, Section, TemplateContext};

const LAYOUT: &str = include_str!("templates/app_shell/layout.js");
const PAGE: &str = include_str!("templates/app_shell/page.js");
const GLOBALS_CSS: &str = include_str!("templates/app_shell/globals.css");
const AUTH_CONTEXT: &str = include_str!("templates/app_shell/AuthContext.js");
const FIREBASE_BOOTSTRAP: &str = include_str!("templates/app_shell/firebase.js");
const DASHBOARD: &str = include_str!("templates/app_shell/Dashboard.js");
const LOGIN_PAGE: &str = include_str!("templates/app_shell/LoginPage.js");
const SIDEBAR: &str = include_str!("templates/app_shell/Sidebar.js");
const TOP_BAR: &str = include_str!("templates/app_shell/TopBar.js");

pub fn files(ctx: &TemplateContext) -> Result<Vec<ScaffoldFile>, DomainError> {
    let section = Section::AppShell;
    Ok(vec![
        ScaffoldFile::new("app/layout.js", render(LAYOUT, ctx)?, section),
        ScaffoldFile::new("app/page.js", render(PAGE, ctx)?, section),
        ScaffoldFile::new("app/globals.css", render(GLOBALS_CSS, ctx)?, section),
        ScaffoldFile::new("contexts/AuthContext.js", render(AUTH_CONTEXT, ctx)?, section),
        ScaffoldFile::new("lib/firebase.js", render(FIREBASE_BOOTSTRAP, ctx)?, section),
        ScaffoldFile::new("components/Dashboard.js", render(DASHBOARD, ctx)?, section),
        ScaffoldFile::new(
            "components/auth/LoginPage.js",
            render(LOGIN_PAGE, ctx)?,
            section,
        ),
        ScaffoldFile::new(
            "components/layout/Sidebar.js",
            render(SIDEBAR, ctx)?,
            section,
        ),
        ScaffoldFile::new("components/layout/TopBar.js", render(TOP_BAR, ctx)?, section),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_metadata_uses_project_identity() {
        let mut ctx = TemplateContext::default();
        ctx.project_name = "Campus Hub".to_string();
        ctx.project_description = "Everything for one campus".to_string();

        let files = files(&ctx).unwrap();
        let layout = files.iter().find(|f| f.path == "app/layout.js").unwrap();

        assert!(layout.content.contains("Campus Hub"));
        assert!(layout.content.contains("Everything for one campus"));
        assert!(!layout.content.contains("ORBIT AI"));
    }

    #[test]
    fn auth_context_wires_google_sign_in() {
        let ctx = TemplateContext::default();
        let files = files(&ctx).unwrap();
        let auth = files
            .iter()
            .find(|f| f.path == "contexts/AuthContext.js")
            .unwrap();

        // the provider instance comes from lib/firebase.js; the context
        // only consumes it
        assert!(auth.content.contains("signInWithPopup"));
        assert!(auth.content.contains("googleProvider"));
        assert!(!auth.content.contains("GoogleAuthProvider"));
        assert!(auth.content.contains("AuthContext.Provider value={value}"));
    }

    #[test]
    fn firebase_bootstrap_reads_public_env() {
        let ctx = TemplateContext::default();
        let files = files(&ctx).unwrap();
        let firebase = files.iter().find(|f| f.path == "lib/firebase.js").unwrap();

        assert!(firebase
            .content
            .contains("process.env.NEXT_PUBLIC_FIREBASE_API_KEY"));
        assert!(firebase.content.contains("getApps"));
        assert!(firebase
            .content
            .contains("export const googleProvider = new GoogleAuthProvider()"));
    }
}
