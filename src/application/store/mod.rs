//! Backend-dispatching store
//!
//! One logical operation per resource capability, routed to whichever backend
//! client the active service selects. Every operation is a single `match` on
//! the (service, backend) pair; a pair that cannot serve the operation fails
//! with `unsupported service: <service>`.

use std::fmt;
use std::sync::Arc;

use crate::application::ApplicationError;
use crate::domain::Service;
use crate::infrastructure::traits::{AtlasApi, OpsManagerApi};

mod api_keys;
mod containers;
mod live_migrations;

pub use api_keys::{OrganizationApiKeyDescriber, OrganizationApiKeyLister, ProjectApiKeyLister};
pub use containers::ContainersLister;
pub use live_migrations::OrganizationsConnector;

/// Pre-constructed client handle of one backend variant.
#[derive(Clone)]
pub enum Backend {
    Atlas(Arc<dyn AtlasApi>),
    OpsManager(Arc<dyn OpsManagerApi>),
}

impl Backend {
    fn kind(&self) -> &'static str {
        match self {
            Backend::Atlas(_) => "atlas",
            Backend::OpsManager(_) => "ops-manager",
        }
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Backend").field(&self.kind()).finish()
    }
}

/// Dispatches logical operations to the active backend.
#[derive(Debug, Clone)]
pub struct Store {
    service: Service,
    backend: Backend,
}

impl Store {
    pub fn new(service: Service, backend: Backend) -> Self {
        Self { service, backend }
    }

    pub fn service(&self) -> Service {
        self.service
    }

    fn unsupported(&self) -> ApplicationError {
        ApplicationError::UnsupportedService(self.service.to_string())
    }
}
