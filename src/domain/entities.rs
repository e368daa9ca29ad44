//! Domain entities: records exchanged with the backends
//!
//! Field names follow the REST wire format so the same types serve as
//! request payloads, response records and `--output json` rendering.

use serde::{Deserialize, Serialize};

/// Programmatic API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<ApiKeyRole>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub public_key: String,
    /// Redacted by the server except in the response to key creation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub private_key: String,
}

/// Role granted to an API key, scoped to an organization or a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyRole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    pub role_name: String,
}

/// Network peering container.
///
/// AWS containers report `region`, Azure and GCP containers report `regionName`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atlas_cidr_block: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp_project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_subscription_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnet_name: Option<String>,
}

impl Container {
    /// Region label for display: `regionName` when present, `region` otherwise.
    pub fn display_region(&self) -> &str {
        match self.region_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.region.as_deref().unwrap_or_default(),
        }
    }
}

/// Token authorizing a cross-organization live-migration link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkToken {
    pub link_token: String,
}

impl LinkToken {
    pub fn new(link_token: impl Into<String>) -> Self {
        Self {
            link_token: link_token.into(),
        }
    }
}

/// Result of linking an organization for live migration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    #[serde(default)]
    pub status: String,
}

/// Pagination options shared by list operations.
///
/// Zero means "let the server decide" and is left off the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page_num: u32,
    pub items_per_page: u32,
}

impl ListOptions {
    pub fn new(page_num: u32, items_per_page: u32) -> Self {
        Self {
            page_num,
            items_per_page,
        }
    }

    /// Query parameters in wire form.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if self.page_num > 0 {
            query.push(("pageNum", self.page_num.to_string()));
        }
        if self.items_per_page > 0 {
            query.push(("itemsPerPage", self.items_per_page.to_string()));
        }
        query
    }
}

/// List options for containers filtered by cloud provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainersListOptions {
    pub list: ListOptions,
    pub provider_name: String,
}

impl ContainersListOptions {
    pub fn new(provider_name: impl Into<String>, list: ListOptions) -> Self {
        Self {
            list,
            provider_name: provider_name.into(),
        }
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.list.query();
        if !self.provider_name.is_empty() {
            query.push(("providerName", self.provider_name.clone()));
        }
        query
    }
}
