//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid values for the core types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported service: {0}")]
    UnknownService(String),
}
