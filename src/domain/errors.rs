//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Template error: {0}")]
    Template(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("File sink error: {0}")]
    Sink(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Verification failed: {0}")]
    Verify(String),
}
