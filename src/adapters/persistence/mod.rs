//! Persistence adapters: the output-tree file sink and the JSON manifest.

pub mod fs_sink;
pub mod manifest_json;

pub use fs_sink::FsSink;
pub use manifest_json::ManifestJson;
