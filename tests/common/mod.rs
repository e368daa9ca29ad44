//! Recording fakes for the backend API traits.
#![allow(dead_code)]

use std::sync::Mutex;

use mongocli::domain::{
    ApiKey, ConnectionStatus, Container, ContainersListOptions, LinkToken, ListOptions,
};
use mongocli::infrastructure::traits::{AtlasApi, OpsManagerApi};
use mongocli::infrastructure::{InfraError, InfraResult};

/// One recorded backend call: operation name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub op: &'static str,
    pub args: Vec<String>,
}

impl Call {
    pub fn new(op: &'static str, args: &[&str]) -> Self {
        Self {
            op,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// A listing call: identifiers followed by page number and page size.
    pub fn listing(op: &'static str, args: &[&str], opts: &ListOptions) -> Self {
        let mut call = Self::new(op, args);
        call.args.push(opts.page_num.to_string());
        call.args.push(opts.items_per_page.to_string());
        call
    }
}

/// API error the backend answers with when throttling.
pub fn rate_limited() -> InfraError {
    InfraError::Api {
        method: "GET".to_string(),
        url: "https://cloud.mongodb.com/api/atlas/v1.0/orgs/o1/apiKeys".to_string(),
        status: 429,
        error_code: "RATE_LIMITED".to_string(),
        detail: "Too many requests.".to_string(),
    }
}

pub fn api_key(id: &str) -> ApiKey {
    ApiKey {
        id: id.to_string(),
        desc: format!("key {id}"),
        public_key: format!("pub-{id}"),
        ..Default::default()
    }
}

pub fn container(id: &str, provider: &str) -> Container {
    Container {
        id: Some(id.to_string()),
        provider_name: Some(provider.to_string()),
        region_name: Some("US_EAST_1".to_string()),
        atlas_cidr_block: Some("10.8.0.0/21".to_string()),
        provisioned: Some(true),
        ..Default::default()
    }
}

#[derive(Default)]
pub struct FakeAtlas {
    pub calls: Mutex<Vec<Call>>,
    pub api_keys: Vec<ApiKey>,
    pub containers: Vec<Container>,
    /// When set, every call records itself and then fails with this error.
    pub fail: Option<fn() -> InfraError>,
}

impl FakeAtlas {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn reply<T>(&self, call: Call, value: T) -> InfraResult<T> {
        self.calls.lock().unwrap().push(call);
        match self.fail {
            Some(fail) => Err(fail()),
            None => Ok(value),
        }
    }
}

impl AtlasApi for FakeAtlas {
    fn list_org_api_keys(&self, org_id: &str, opts: &ListOptions) -> InfraResult<Vec<ApiKey>> {
        let call = Call::listing("list_org_api_keys", &[org_id], opts);
        self.reply(call, self.api_keys.clone())
    }

    fn get_org_api_key(&self, org_id: &str, api_key_id: &str) -> InfraResult<ApiKey> {
        let call = Call::new("get_org_api_key", &[org_id, api_key_id]);
        self.reply(call, api_key(api_key_id))
    }

    fn list_project_api_keys(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> InfraResult<Vec<ApiKey>> {
        let call = Call::listing("list_project_api_keys", &[project_id], opts);
        self.reply(call, self.api_keys.clone())
    }

    fn list_containers(
        &self,
        project_id: &str,
        opts: &ContainersListOptions,
    ) -> InfraResult<Vec<Container>> {
        let call = Call::listing(
            "list_containers",
            &[project_id, &opts.provider_name],
            &opts.list,
        );
        self.reply(call, self.containers.clone())
    }

    fn list_all_containers(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> InfraResult<Vec<Container>> {
        let call = Call::listing("list_all_containers", &[project_id], opts);
        self.reply(call, self.containers.clone())
    }
}

#[derive(Default)]
pub struct FakeOpsManager {
    pub calls: Mutex<Vec<Call>>,
    pub api_keys: Vec<ApiKey>,
    /// When set, every call records itself and then fails with this error.
    pub fail: Option<fn() -> InfraError>,
}

impl FakeOpsManager {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn reply<T>(&self, call: Call, value: T) -> InfraResult<T> {
        self.calls.lock().unwrap().push(call);
        match self.fail {
            Some(fail) => Err(fail()),
            None => Ok(value),
        }
    }
}

impl OpsManagerApi for FakeOpsManager {
    fn list_org_api_keys(&self, org_id: &str, opts: &ListOptions) -> InfraResult<Vec<ApiKey>> {
        let call = Call::listing("list_org_api_keys", &[org_id], opts);
        self.reply(call, self.api_keys.clone())
    }

    fn get_org_api_key(&self, org_id: &str, api_key_id: &str) -> InfraResult<ApiKey> {
        let call = Call::new("get_org_api_key", &[org_id, api_key_id]);
        self.reply(call, api_key(api_key_id))
    }

    fn list_project_api_keys(
        &self,
        project_id: &str,
        opts: &ListOptions,
    ) -> InfraResult<Vec<ApiKey>> {
        let call = Call::listing("list_project_api_keys", &[project_id], opts);
        self.reply(call, self.api_keys.clone())
    }

    fn connect_organizations(
        &self,
        org_id: &str,
        link_token: &LinkToken,
    ) -> InfraResult<ConnectionStatus> {
        let call = Call::new("connect_organizations", &[org_id, &link_token.link_token]);
        let status = ConnectionStatus {
            status: "SYNCED".to_string(),
        };
        self.reply(call, status)
    }
}
