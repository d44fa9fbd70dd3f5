//! Firebase deployment config and security rules: firebase.json, Firestore
//! and Storage rules, composite indexes for chat and voice queries.

use serde_json::json;

use super::{json_pretty, render::render};
use crate::domain::{DomainError, ScaffoldFile, Section, TemplateContext};

const FIRESTORE_RULES: &str = include_str!("templates/firebase/firestore.rules");
const STORAGE_RULES: &str = include_str!("templates/firebase/storage.rules");

pub fn files(ctx: &TemplateContext) -> Result<Vec<ScaffoldFile>, DomainError> {
    let section = Section::Firebase;
    Ok(vec![
        ScaffoldFile::new("firebase.json", firebase_json()?, section),
        ScaffoldFile::new("firestore.rules", render(FIRESTORE_RULES, ctx)?, section),
        ScaffoldFile::new("storage.rules", render(STORAGE_RULES, ctx)?, section),
        ScaffoldFile::new("firestore.indexes.json", firestore_indexes()?, section),
    ])
}

fn firebase_json() -> Result<String, DomainError> {
    let value = json!({
        "functions": {
            "source": "functions",
            "runtime": "nodejs18"
        },
        "firestore": {
            "rules": "firestore.rules",
            "indexes": "firestore.indexes.json"
        },
        "storage": {
            "rules": "storage.rules"
        },
        "hosting": {
            "public": "out",
            "ignore": ["firebase.json", "**/.*", "**/node_modules/**"],
            "rewrites": [
                {
                    "source": "**",
                    "destination": "/index.html"
                }
            ]
        },
        "emulators": {
            "functions": {
                "port": 5001
            },
            "firestore": {
                "port": 8080
            },
            "hosting": {
                "port": 5000
            },
            "storage": {
                "port": 9199
            }
        }
    });
    json_pretty(&value)
}

fn firestore_indexes() -> Result<String, DomainError> {
    let value = json!({
        "indexes": [
            {
                "collectionGroup": "messages",
                "queryScope": "COLLECTION",
                "fields": [
                    {"fieldPath": "roomId", "order": "ASCENDING"},
                    {"fieldPath": "timestamp", "order": "DESCENDING"}
                ]
            },
            {
                "collectionGroup": "voiceSessions",
                "queryScope": "COLLECTION",
                "fields": [
                    {"fieldPath": "userId", "order": "ASCENDING"},
                    {"fieldPath": "createdAt", "order": "DESCENDING"}
                ]
            }
        ],
        "fieldOverrides": []
    });
    json_pretty(&value)
}
