//! Backend service discriminator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The deployment target a profile talks to.
///
/// Cloud is the hosted Atlas API; Ops Manager and Cloud Manager share the
/// Ops Manager public API and differ only in where it is served from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    #[default]
    Cloud,
    OpsManager,
    CloudManager,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::Cloud, Service::OpsManager, Service::CloudManager];

    /// Config and wire name (`cloud`, `ops-manager`, `cloud-manager`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Cloud => "cloud",
            Service::OpsManager => "ops-manager",
            Service::CloudManager => "cloud-manager",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cloud" => Ok(Service::Cloud),
            "ops-manager" => Ok(Service::OpsManager),
            "cloud-manager" => Ok(Service::CloudManager),
            other => Err(DomainError::UnknownService(other.to_string())),
        }
    }
}
