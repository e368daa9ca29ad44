//! Application-level errors (wraps domain and infrastructure errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// Application errors wrap lower-layer errors and add dispatch and
/// configuration failures.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Backend call failed; surfaced as reported by the API.
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("unsupported service: {0}")]
    UnsupportedService(String),

    #[error("no project ID provided")]
    MissingProjectId,

    #[error("no organization ID provided")]
    MissingOrgId,

    #[error("this action requires authentication: set public_api_key and private_api_key for profile '{profile}'")]
    MissingCredentials { profile: String },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
