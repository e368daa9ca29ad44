//! Service container for dependency injection
//!
//! Turns settings into a store backed by the matching REST client.

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, Backend, Store};
use crate::config::Settings;
use crate::domain::Service;
use crate::infrastructure::atlas::AtlasClient;
use crate::infrastructure::digest::Credentials;
use crate::infrastructure::http::ApiClient;
use crate::infrastructure::opsmngr::OpsManagerClient;

/// Container holding the active settings.
///
/// The store is built on demand so commands that never call a backend
/// (e.g. `config show`) do not require credentials.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,
}

impl ServiceContainer {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Active service discriminator.
    ///
    /// Fails with `unsupported service` for a value outside the closed set.
    pub fn service(&self) -> ApplicationResult<Service> {
        Ok(self.settings.service.parse::<Service>()?)
    }

    /// Build an authenticated store for the active service.
    pub fn store(&self) -> ApplicationResult<Store> {
        let service = self.service()?;
        let (public_key, private_key) =
            self.settings
                .api_keys()
                .ok_or_else(|| ApplicationError::MissingCredentials {
                    profile: self.settings.profile.clone(),
                })?;
        let base_url = self.settings.base_url_for(service)?;
        debug!(%service, %base_url, "building store");

        let api = ApiClient::new(&base_url, Some(Credentials::new(public_key, private_key)))?;
        let backend = match service {
            Service::Cloud => Backend::Atlas(Arc::new(AtlasClient::new(api))),
            Service::OpsManager | Service::CloudManager => {
                Backend::OpsManager(Arc::new(OpsManagerClient::new(api)))
            }
        };
        Ok(Store::new(service, backend))
    }
}
