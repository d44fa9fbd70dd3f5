//! Application configuration. Output location, project identity, Firebase values.

use serde::Deserialize;

use crate::domain::TemplateContext;

/// Default output directory when nothing is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "./orbit-ai";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory the scaffold is written into. Read from ORBIT_SCAFFOLD_OUTPUT_DIR.
    pub output_dir: Option<String>,

    /// Overwrite locally edited files instead of reporting conflicts.
    /// Read from ORBIT_SCAFFOLD_FORCE_OVERWRITE.
    #[serde(default)]
    pub force_overwrite: Option<bool>,

    // ─────────────────────────────────────────────────────────────────────────
    // Project Identity
    // ─────────────────────────────────────────────────────────────────────────
    /// Display name baked into layouts, docs and the summary. Read from
    /// ORBIT_SCAFFOLD_PROJECT_NAME.
    #[serde(default)]
    pub project_name: Option<String>,

    /// npm-style package slug. Read from ORBIT_SCAFFOLD_PROJECT_SLUG.
    #[serde(default)]
    pub project_slug: Option<String>,

    /// One-line tagline. Read from ORBIT_SCAFFOLD_PROJECT_DESCRIPTION.
    #[serde(default)]
    pub project_description: Option<String>,

    /// Contact for the emitted SECURITY.md. Read from ORBIT_SCAFFOLD_SECURITY_EMAIL.
    #[serde(default)]
    pub security_email: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Firebase Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Firebase project ID. Auth domain and storage bucket derive from it
    /// unless set explicitly. Read from ORBIT_SCAFFOLD_FIREBASE_PROJECT_ID.
    #[serde(default)]
    pub firebase_project_id: Option<String>,

    /// Web API key for the generated `.env.example`. Read from
    /// ORBIT_SCAFFOLD_FIREBASE_API_KEY.
    #[serde(default)]
    pub firebase_api_key: Option<String>,

    /// Read from ORBIT_SCAFFOLD_FIREBASE_AUTH_DOMAIN.
    #[serde(default)]
    pub firebase_auth_domain: Option<String>,

    /// Read from ORBIT_SCAFFOLD_FIREBASE_STORAGE_BUCKET.
    #[serde(default)]
    pub firebase_storage_bucket: Option<String>,

    /// Read from ORBIT_SCAFFOLD_FIREBASE_MESSAGING_SENDER_ID.
    #[serde(default)]
    pub firebase_messaging_sender_id: Option<String>,

    /// Read from ORBIT_SCAFFOLD_FIREBASE_APP_ID.
    #[serde(default)]
    pub firebase_app_id: Option<String>,

    /// Read from ORBIT_SCAFFOLD_FIREBASE_MEASUREMENT_ID.
    #[serde(default)]
    pub firebase_measurement_id: Option<String>,

    /// Hugging Face API key placeholder for `.env.example`. Read from
    /// ORBIT_SCAFFOLD_HF_API_KEY.
    #[serde(default)]
    pub hf_api_key: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("ORBIT_SCAFFOLD"));
        if let Ok(path) = std::env::var("ORBIT_SCAFFOLD_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let cfg: Self = c.build()?.try_deserialize()?;
        Ok(cfg)
    }

    /// Returns the output directory. Defaults to ./orbit-ai if unset.
    pub fn output_dir_or_default(&self) -> String {
        self.output_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
    }

    /// Returns the overwrite policy flag. Defaults to false (respect edits).
    pub fn force_overwrite_or_default(&self) -> bool {
        self.force_overwrite.unwrap_or(false)
    }

    /// Render context assembled from configured values over the stock ORBIT
    /// defaults. Auth domain and storage bucket derive from the project ID
    /// unless configured explicitly, so a single ORBIT_SCAFFOLD_FIREBASE_PROJECT_ID
    /// keeps the emitted `.env.example` self-consistent.
    pub fn template_context(&self) -> TemplateContext {
        let mut ctx = TemplateContext::default();
        if let Some(v) = &self.project_name {
            ctx.project_name = v.clone();
        }
        if let Some(v) = &self.project_slug {
            ctx.project_slug = v.clone();
        }
        if let Some(v) = &self.project_description {
            ctx.project_description = v.clone();
        }
        if let Some(v) = &self.security_email {
            ctx.security_email = v.clone();
        }
        if let Some(v) = &self.firebase_project_id {
            ctx.firebase_project_id = v.clone();
        }
        ctx.firebase_auth_domain = self
            .firebase_auth_domain
            .clone()
            .unwrap_or_else(|| format!("{}.firebaseapp.com", ctx.firebase_project_id));
        ctx.firebase_storage_bucket = self
            .firebase_storage_bucket
            .clone()
            .unwrap_or_else(|| format!("{}.firebasestorage.app", ctx.firebase_project_id));
        if let Some(v) = &self.firebase_api_key {
            ctx.firebase_api_key = v.clone();
        }
        if let Some(v) = &self.firebase_messaging_sender_id {
            ctx.firebase_messaging_sender_id = v.clone();
        }
        if let Some(v) = &self.firebase_app_id {
            ctx.firebase_app_id = v.clone();
        }
        if let Some(v) = &self.firebase_measurement_id {
            ctx.firebase_measurement_id = v.clone();
        }
        if let Some(v) = &self.hf_api_key {
            ctx.hf_api_key = v.clone();
        }
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_derives_domains_from_project_id() {
        let cfg = AppConfig {
            firebase_project_id: Some("my-campus-app".to_string()),
            ..Default::default()
        };
        let ctx = cfg.template_context();

        assert_eq!(ctx.firebase_project_id, "my-campus-app");
        assert_eq!(ctx.firebase_auth_domain, "my-campus-app.firebaseapp.com");
        assert_eq!(
            ctx.firebase_storage_bucket,
            "my-campus-app.firebasestorage.app"
        );
    }

    #[test]
    fn explicit_domains_win_over_derivation() {
        let cfg = AppConfig {
            firebase_project_id: Some("my-campus-app".to_string()),
            firebase_auth_domain: Some("auth.example.edu".to_string()),
            ..Default::default()
        };
        let ctx = cfg.template_context();

        assert_eq!(ctx.firebase_auth_domain, "auth.example.edu");
        assert_eq!(
            ctx.firebase_storage_bucket,
            "my-campus-app.firebasestorage.app"
        );
    }

    #[test]
    fn defaults_keep_stock_identity() {
        let cfg = AppConfig::default();
        let ctx = cfg.template_context();

        assert_eq!(ctx.project_name, "ORBIT AI");
        assert_eq!(ctx.project_slug, "orbit-ai");
        assert_eq!(cfg.output_dir_or_default(), DEFAULT_OUTPUT_DIR);
        assert!(!cfg.force_overwrite_or_default());
    }
}
