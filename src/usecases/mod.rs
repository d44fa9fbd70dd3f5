//! Application use cases. Orchestrate domain logic via ports.

pub mod scaffold_service;
pub mod verify_service;

pub use scaffold_service::ScaffoldService;
pub use verify_service::VerifyService;
