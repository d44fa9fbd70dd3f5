//! Cross-cutting helpers: configuration and content hashing.

pub mod checksum;
pub mod config;
