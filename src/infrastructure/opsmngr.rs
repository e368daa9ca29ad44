//! Ops Manager / Cloud Manager API client

use tracing::instrument;

use crate::domain::{ApiKey, ConnectionStatus, LinkToken, ListOptions};
use crate::infrastructure::http::{ApiClient, Paginated};
use crate::infrastructure::traits::OpsManagerApi;
use crate::infrastructure::InfraResult;

const API_PREFIX: [&str; 3] = ["api", "public", "v1.0"];

/// Client for the Ops Manager public API (also served by Cloud Manager).
#[derive(Debug, Clone)]
pub struct OpsManagerClient {
    api: ApiClient,
}

impl OpsManagerClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

fn endpoint<'a>(rest: &[&'a str]) -> Vec<&'a str> {
    API_PREFIX.iter().copied().chain(rest.iter().copied()).collect()
}

impl OpsManagerApi for OpsManagerClient {
    #[instrument(level = "debug", skip(self))]
    fn list_org_api_keys(&self, org_id: &str, opts: &ListOptions) -> InfraResult<Vec<ApiKey>> {
        let page: Paginated<ApiKey> = self
            .api
            .get(&endpoint(&["orgs", org_id, "apiKeys"]), &opts.query())?;
        Ok(page.results)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_org_api_key(&self, org_id: &str, api_key_id: &str) -> InfraResult<ApiKey> {
        self.api
            .get(&endpoint(&["orgs", org_id, "apiKeys", api_key_id]), &[])
    }

    #[instrument(level = "debug", skip(self))]
    fn list_project_api_keys(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> InfraResult<Vec<ApiKey>> {
        let page: Paginated<ApiKey> = self
            .api
            .get(&endpoint(&["groups", project_id, "apiKeys"]), &opts.query())?;
        Ok(page.results)
    }

    #[instrument(level = "debug", skip(self, link_token))]
    fn connect_organizations(
        &self,
        org_id: &str,
        link_token: &LinkToken,
    ) -> InfraResult<ConnectionStatus> {
        self.api.post(
            &endpoint(&["orgs", org_id, "liveExport", "migrationLink"]),
            link_token,
        )
    }
}
