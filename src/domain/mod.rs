//! Domain layer: entities and value types
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod service;

pub use entities::*;
pub use error::DomainError;
pub use service::Service;
