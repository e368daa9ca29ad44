//! Live migration organization links (Ops Manager and Cloud Manager only)

use tracing::debug;

use super::{Backend, Store};
use crate::application::ApplicationResult;
use crate::domain::{ConnectionStatus, LinkToken, Service};

pub trait OrganizationsConnector {
    fn connect_organizations(
        &self,
        org_id: &str,
        link_token: &LinkToken,
    ) -> ApplicationResult<ConnectionStatus>;
}

impl OrganizationsConnector for Store {
    fn connect_organizations(
        &self,
        org_id: &str,
        link_token: &LinkToken,
    ) -> ApplicationResult<ConnectionStatus> {
        debug!(service = %self.service, org_id, "connect organizations");
        match (self.service, &self.backend) {
            (Service::OpsManager | Service::CloudManager, Backend::OpsManager(client)) => {
                Ok(client.connect_organizations(org_id, link_token)?)
            }
            _ => Err(self.unsupported()),
        }
    }
}
