//! Infrastructure adapters. Implement outbound ports.
//!
//! Template catalog, filesystem, terminal UI. Map errors to DomainError.

pub mod catalog;
pub mod persistence;
pub mod ui;
