//! Application layer: backend dispatch and use cases
//!
//! This layer selects the active backend and depends on I/O boundary traits.

pub mod error;
pub mod store;

pub use error::{ApplicationError, ApplicationResult};
pub use store::{
    Backend, ContainersLister, OrganizationApiKeyDescriber, OrganizationApiKeyLister,
    OrganizationsConnector, ProjectApiKeyLister, Store,
};
