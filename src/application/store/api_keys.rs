//! API key operations

use tracing::debug;

use super::{Backend, Store};
use crate::application::ApplicationResult;
use crate::domain::{ApiKey, ListOptions, Service};

pub trait OrganizationApiKeyLister {
    fn organization_api_keys(&self, org_id: &str, opts: &ListOptions)
        -> ApplicationResult<Vec<ApiKey>>;
}

pub trait OrganizationApiKeyDescriber {
    fn organization_api_key(&self, org_id: &str, api_key_id: &str) -> ApplicationResult<ApiKey>;
}

pub trait ProjectApiKeyLister {
    fn project_api_keys(&self, project_id: &str, opts: &ListOptions)
        -> ApplicationResult<Vec<ApiKey>>;
}

impl OrganizationApiKeyLister for Store {
    fn organization_api_keys(
        &self,
        org_id: &str,
        opts: &ListOptions,
    ) -> ApplicationResult<Vec<ApiKey>> {
        debug!(service = %self.service, org_id, "list organization API keys");
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Atlas(client)) => Ok(client.list_org_api_keys(org_id, opts)?),
            (Service::OpsManager | Service::CloudManager, Backend::OpsManager(client)) => {
                Ok(client.list_org_api_keys(org_id, opts)?)
            }
            _ => Err(self.unsupported()),
        }
    }
}

impl OrganizationApiKeyDescriber for Store {
    fn organization_api_key(&self, org_id: &str, api_key_id: &str) -> ApplicationResult<ApiKey> {
        debug!(service = %self.service, org_id, api_key_id, "describe organization API key");
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Atlas(client)) => {
                Ok(client.get_org_api_key(org_id, api_key_id)?)
            }
            (Service::OpsManager | Service::CloudManager, Backend::OpsManager(client)) => {
                Ok(client.get_org_api_key(org_id, api_key_id)?)
            }
            _ => Err(self.unsupported()),
        }
    }
}

impl ProjectApiKeyLister for Store {
    fn project_api_keys(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> ApplicationResult<Vec<ApiKey>> {
        debug!(service = %self.service, project_id, "list project API keys");
        match (self.service, &self.backend) {
            (Service::Cloud, Backend::Atlas(client)) => {
                Ok(client.list_project_api_keys(project_id, opts)?)
            }
            (Service::OpsManager | Service::CloudManager, Backend::OpsManager(client)) => {
                Ok(client.list_project_api_keys(project_id, opts)?)
            }
            _ => Err(self.unsupported()),
        }
    }
}
