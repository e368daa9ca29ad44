//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Output(_) => crate::exitcode::IOERR,
            CliError::Json(_) => crate::exitcode::SOFTWARE,
            CliError::Application(e) => match e {
                ApplicationError::MissingProjectId | ApplicationError::MissingOrgId => {
                    crate::exitcode::USAGE
                }
                ApplicationError::Domain(_)
                | ApplicationError::UnsupportedService(_)
                | ApplicationError::MissingCredentials { .. }
                | ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Infra(InfraError::Api { status, .. })
                    if *status == 401 || *status == 403 =>
                {
                    crate::exitcode::NOPERM
                }
                ApplicationError::Infra(InfraError::InvalidUrl { .. }) => crate::exitcode::CONFIG,
                ApplicationError::Infra(_) => crate::exitcode::UNAVAILABLE,
            },
        }
    }
}
