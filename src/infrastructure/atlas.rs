//! Atlas API client

use tracing::instrument;

use crate::domain::{ApiKey, Container, ContainersListOptions, ListOptions};
use crate::infrastructure::http::{ApiClient, Paginated};
use crate::infrastructure::traits::AtlasApi;
use crate::infrastructure::InfraResult;

const API_PREFIX: [&str; 3] = ["api", "atlas", "v1.0"];

/// Client for the hosted Atlas API.
#[derive(Debug, Clone)]
pub struct AtlasClient {
    api: ApiClient,
}

impl AtlasClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

fn endpoint<'a>(rest: &[&'a str]) -> Vec<&'a str> {
    API_PREFIX.iter().copied().chain(rest.iter().copied()).collect()
}

impl AtlasApi for AtlasClient {
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

    #[instrument(level = "debug", skip(self))]
    fn list_containers(
        &self,
        project_id: &str,
        opts: &ContainersListOptions,
    ) -> InfraResult<Vec<Container>> {
        let page: Paginated<Container> = self
            .api
            .get(&endpoint(&["groups", project_id, "containers"]), &opts.query())?;
        Ok(page.results)
    }

    #[instrument(level = "debug", skip(self))]
    fn list_all_containers(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> InfraResult<Vec<Container>> {
        let page: Paginated<Container> = self.api.get(
            &endpoint(&["groups", project_id, "containers", "all"]),
            &opts.query(),
        )?;
        Ok(page.results)
    }
}
