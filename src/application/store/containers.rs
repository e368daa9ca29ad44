//! Network peering container operations (Atlas only)

use tracing::debug;

use super::{Backend, Store};
use crate::application::ApplicationResult;
use crate::domain::{Container, ContainersListOptions, ListOptions, Service};

pub trait ContainersLister {
    /// Containers of every cloud provider.
    fn all_containers(&self, project_id: &str, opts: &ListOptions)
        -> ApplicationResult<Vec<Container>>;

    /// Containers of the provider named in `opts`.
    fn containers_by_provider(
        &self,
        project_id: &str,
        opts: &ContainersListOptions,
    ) -> ApplicationResult<Vec<Container>>;
}

impl ContainersLister for Store {
    fn all_containers(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> ApplicationResult<Vec<Container>> {
        debug!(service = %self.service, project_id, "list all containers");
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Atlas(client)) => {
                Ok(client.list_all_containers(project_id, opts)?)
            }
            _ => Err(self.unsupported()),
        }
    }

    fn containers_by_provider(
        &self,
        project_id: &str,
        opts: &ContainersListOptions,
    ) -> ApplicationResult<Vec<Container>> {
        debug!(
            service = %self.service,
            project_id,
            provider = %opts.provider_name,
            "list containers by provider"
        );
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Atlas(client)) => {
                Ok(client.list_containers(project_id, opts)?)
            }
            _ => Err(self.unsupported()),
        }
    }
}
