//! Cloud Functions backend: the Hugging Face proxy functions, their npm
//! manifest, lint config, and README.

use serde_json::json;

use super::{json_pretty, render::render};
use crate::domain::{DomainError, ScaffoldFile, Section, TemplateContext};

const INDEX_JS: &str = include_str!("templates/functions/index.js");
const ESLINTRC: &str = include_str!("templates/functions/eslintrc.js");
const README: &str = include_str!("templates/functions/README.md");

pub fn files(ctx: &TemplateContext) -> Result<Vec<ScaffoldFile>, DomainError> {
    let section = Section::CloudFunctions;
    Ok(vec![
        ScaffoldFile::new("functions/index.js", render(INDEX_JS, ctx)?, section),
        ScaffoldFile::new("functions/package.json", package_json()?, section),
        ScaffoldFile::new("functions/.eslintrc.js", render(ESLINTRC, ctx)?, section),
        ScaffoldFile::new("functions/README.md", render(README, ctx)?, section),
    ])
}

fn package_json() -> Result<String, DomainError> {
    let value = json!({
        "name": "functions",
        "description": "Cloud Functions for Firebase",
        "scripts": {
            "lint": "eslint .",
            "serve": "firebase emulators:start --only functions",
            "shell": "firebase functions:shell",
            "start": "npm run shell",
            "deploy": "firebase deploy --only functions",
            "logs": "firebase functions:log"
        },
        "engines": {
            "node": "18"
        },
        "main": "index.js",
        "dependencies": {
            "firebase-admin": "^11.0.0",
            "firebase-functions": "^4.0.0",
            "axios": "^1.6.0",
            "cors": "^2.8.5"
        },
        "devDependencies": {
            "eslint": "^8.0.0",
            "eslint-config-google": "^0.14.0"
        },
        "private": true
    });
    json_pretty(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_exposes_hugging_face_endpoints() {
        let ctx = TemplateContext::default();
        let files = files(&ctx).unwrap();
        let index = files.iter().find(|f| f.path == "functions/index.js").unwrap();

        for export in [
            "exports.generateResume",
            "exports.fixCode",
            "exports.generateDocument",
            "exports.generatePresentation",
            "exports.analyzeVoice",
            "exports.chatWithAI",
        ] {
            assert!(index.content.contains(export), "missing {export}");
        }
        assert!(index.content.contains("api-inference.huggingface.co"));
    }

    #[test]
    fn package_json_declares_runtime_deps() {
        let text = package_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed["engines"]["node"], "18");
        for dep in ["firebase-admin", "firebase-functions", "axios", "cors"] {
            assert!(parsed["dependencies"][dep].is_string(), "missing {dep}");
        }
    }
}
