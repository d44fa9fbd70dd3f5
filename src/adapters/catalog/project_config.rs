//! Root project configuration: package.json, Next.js and Tailwind config,
//! and the `.env.example` the generated app reads its Firebase keys from.

use serde_json::json;

use super::{json_pretty, render::render};
use crate::domain::{DomainError, ScaffoldFile, Section, TemplateContext};

const NEXT_CONFIG: &str = include_str!("templates/config/next.config.js");
const TAILWIND_CONFIG: &str = include_str!("templates/config/tailwind.config.js");
const ENV_EXAMPLE: &str = include_str!("templates/config/env.example");

pub fn files(ctx: &TemplateContext) -> Result<Vec<ScaffoldFile>, DomainError> {
    let section = Section::ProjectConfig;
    Ok(vec![
        ScaffoldFile::new("package.json", package_json(ctx)?, section),
        ScaffoldFile::new("next.config.js", render(NEXT_CONFIG, ctx)?, section),
        ScaffoldFile::new("tailwind.config.js", render(TAILWIND_CONFIG, ctx)?, section),
        ScaffoldFile::new(".env.example", render(ENV_EXAMPLE, ctx)?, section),
    ])
}

fn package_json(ctx: &TemplateContext) -> Result<String, DomainError> {
    let value = json!({
        "name": ctx.project_slug,
        "version": "1.0.0",
        "description": ctx.project_description,
        "main": "index.js",
        "scripts": {
            "dev": "next dev",
            "build": "next build",
            "start": "next start",
            "lint": "next lint",
            "test": "jest",
            "test:e2e": "playwright test",
            "firebase:emulators": "firebase emulators:start",
            "deploy": "firebase deploy"
        },
        "dependencies": {
            "next": "^14.0.0",
            "react": "^18.0.0",
            "react-dom": "^18.0.0",
            "firebase": "^10.0.0",
            "firestore": "^1.1.6",
            "firebase-admin": "^11.0.0",
            "@monaco-editor/react": "^4.6.0",
            "jspdf": "^2.5.1",
            "html2canvas": "^1.4.1",
            "pptxgenjs": "^3.12.0",
            "eslint": "^8.0.0",
            "tailwindcss": "^3.3.0",
            "@tailwindcss/forms": "^0.5.6",
            "@headlessui/react": "^1.7.17",
            "@heroicons/react": "^2.0.18",
            "clsx": "^2.0.0",
            "lucide-react": "^0.263.1"
        },
        "devDependencies": {
            "@types/node": "^20.0.0",
            "@types/react": "^18.0.0",
            "@types/react-dom": "^18.0.0",
            "typescript": "^5.0.0",
            "eslint-config-next": "^14.0.0",
            "jest": "^29.0.0",
            "@testing-library/react": "^13.4.0",
            "@testing-library/jest-dom": "^6.1.0",
            "playwright": "^1.39.0",
            "@playwright/test": "^1.39.0",
            "autoprefixer": "^10.4.16",
            "postcss": "^8.4.31"
        },
        "engines": {
            "node": ">=18.0.0"
        }
    });
    json_pretty(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_json_carries_project_identity() {
        let ctx = TemplateContext::default();
        let text = package_json(&ctx).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed["name"], "orbit-ai");
        assert_eq!(parsed["scripts"]["test:e2e"], "playwright test");
        assert_eq!(parsed["dependencies"]["next"], "^14.0.0");
        assert_eq!(parsed["engines"]["node"], ">=18.0.0");
        // insertion order survives pretty printing
        assert!(text.find("\"name\"").unwrap() < text.find("\"version\"").unwrap());
    }

    #[test]
    fn env_example_resolves_all_placeholders() {
        let ctx = TemplateContext::default();
        let files = files(&ctx).unwrap();
        let env = files.iter().find(|f| f.path == ".env.example").unwrap();

        assert!(env.content.contains("NEXT_PUBLIC_FIREBASE_API_KEY=your-firebase-api-key"));
        assert!(env
            .content
            .contains("NEXT_PUBLIC_FIREBASE_AUTH_DOMAIN=orbit-ai-demo.firebaseapp.com"));
        assert!(env.content.contains("HF_API_KEY=hf_your-hugging-face-api-key"));
        assert!(!env.content.contains("{{"));
    }
}
