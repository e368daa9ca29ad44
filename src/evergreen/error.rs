//! Generator flag validation errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("--tool_name missing")]
    ToolNameMissing,

    #[error("--tool_name must be either 'atlascli' or 'mongocli'")]
    InvalidToolName(String),

    #[error("--tasks missing")]
    TasksMissing,

    #[error("--tasks is invalid")]
    InvalidTasks(String),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
