//! CI task graph generator
//!
//! Expands fixed lists of server versions, operating systems and package
//! repositories into an evergreen task graph for the `genevergreen` binary.

mod error;
mod shrub;
mod tasks;

pub use error::{GeneratorError, GeneratorResult};
pub use shrub::{CommandDefinition, Configuration, Task, TaskDependency, TaskRef, Variant};
pub use tasks::{
    generate, generate_post_pkg_meta_tasks, generate_post_pkg_tasks, generate_repo_tasks,
    TaskType, ToolName, OSES, REPOS, RUN_ON, SERVER_VERSIONS,
};
