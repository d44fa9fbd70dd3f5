//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    ManifestEntry, OverwriteMode, ScaffoldFile, ScaffoldStats, Section, TemplateContext,
    VerifyReport, VerifyStatus, WriteOutcome,
};
pub use errors::DomainError;
