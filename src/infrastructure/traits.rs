//! I/O boundary traits for the backend REST APIs
//!
//! Each backend variant exposes a structurally similar but distinct API.
//! The store depends on these traits, allowing it to be tested with
//! recording fakes instead of live services.

use crate::domain::{
    ApiKey, ConnectionStatus, Container, ContainersListOptions, LinkToken, ListOptions,
};
use crate::infrastructure::InfraResult;

/// Atlas (cloud) API surface used by the CLI.
pub trait AtlasApi: Send + Sync {
    /// `GET /api/atlas/v1.0/orgs/{orgId}/apiKeys`
    fn list_org_api_keys(&self, org_id: &str, opts: &ListOptions) -> InfraResult<Vec<ApiKey>>;

    /// `GET /api/atlas/v1.0/orgs/{orgId}/apiKeys/{apiKeyId}`
    fn get_org_api_key(&self, org_id: &str, api_key_id: &str) -> InfraResult<ApiKey>;

    /// `GET /api/atlas/v1.0/groups/{groupId}/apiKeys`
    fn list_project_api_keys(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> InfraResult<Vec<ApiKey>>;

    /// `GET /api/atlas/v1.0/groups/{groupId}/containers?providerName=...`
    fn list_containers(
        &self,
        project_id: &str,
        opts: &ContainersListOptions,
    ) -> InfraResult<Vec<Container>>;

    /// `GET /api/atlas/v1.0/groups/{groupId}/containers/all`
    fn list_all_containers(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> InfraResult<Vec<Container>>;
}

/// Ops Manager / Cloud Manager public API surface used by the CLI.
pub trait OpsManagerApi: Send + Sync {
    /// `GET /api/public/v1.0/orgs/{orgId}/apiKeys`
    fn list_org_api_keys(&self, org_id: &str, opts: &ListOptions) -> InfraResult<Vec<ApiKey>>;

    /// `GET /api/public/v1.0/orgs/{orgId}/apiKeys/{apiKeyId}`
    fn get_org_api_key(&self, org_id: &str, api_key_id: &str) -> InfraResult<ApiKey>;

    /// `GET /api/public/v1.0/groups/{groupId}/apiKeys`
    fn list_project_api_keys(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> InfraResult<Vec<ApiKey>>;

    /// `POST /api/public/v1.0/orgs/{orgId}/liveExport/migrationLink`
    fn connect_organizations(
        &self,
        org_id: &str,
        link_token: &LinkToken,
    ) -> InfraResult<ConnectionStatus>;
}
