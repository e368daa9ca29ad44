//! Configuration management with profile-based loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (`service = "cloud"`)
//! 2. Profile table from the config file: `$XDG_CONFIG_HOME/mongocli/mongocli.toml`
//! 3. Environment variables: `MCLI_*` prefix
//!
//! The file holds one table per profile:
//!
//! ```toml
//! [default]
//! service = "cloud"
//! public_api_key = "abcdef"
//! private_api_key = "..."
//! org_id = "5e2211c17a3e5a48f5497de3"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::Service;

pub const DEFAULT_PROFILE: &str = "default";

/// Base URL of the hosted Atlas and Cloud Manager APIs.
pub const CLOUD_BASE_URL: &str = "https://cloud.mongodb.com/";

const ENV_PREFIX: &str = "MCLI";

/// Settings of the active profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Profile these settings were read from
    #[serde(skip)]
    pub profile: String,
    /// Backend discriminator: `cloud`, `ops-manager` or `cloud-manager`.
    /// Kept raw so an unknown value is reported by the store.
    pub service: String,
    pub public_api_key: Option<String>,
    pub private_api_key: Option<String>,
    /// Required when `service = "ops-manager"`
    pub ops_manager_url: Option<String>,
    /// Overrides the service's default base URL
    pub base_url: Option<String>,
    pub org_id: Option<String>,
    pub project_id: Option<String>,
    /// Default output format (`plain` or `json`)
    pub output: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_string(),
            service: Service::Cloud.to_string(),
            public_api_key: None,
            private_api_key: None,
            ops_manager_url: None,
            base_url: None,
            org_id: None,
            project_id: None,
            output: None,
        }
    }
}

/// Get the XDG config directory for mongocli.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mongocli").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("mongocli.toml"))
}

/// Read all profile tables from a TOML file.
fn load_profiles(path: &Path) -> Result<BTreeMap<String, Settings>, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Settings {
    /// Load a profile from the default config path plus `MCLI_*` overrides.
    pub fn load(profile: &str) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), profile)
    }

    /// Load a profile from an explicit config file plus `MCLI_*` overrides.
    ///
    /// A missing file yields defaults. A missing profile is an error unless it
    /// is the default profile.
    pub fn load_from(path: Option<&Path>, profile: &str) -> Result<Self, ApplicationError> {
        let settings = Self::load_file(path, profile)?;
        settings.apply_env_overrides(env_source())
    }

    fn load_file(path: Option<&Path>, profile: &str) -> Result<Self, ApplicationError> {
        let mut profiles = match path {
            Some(path) if path.exists() => load_profiles(path)?,
            _ => BTreeMap::new(),
        };

        let mut settings = match profiles.remove(profile) {
            Some(settings) => settings,
            None if profile == DEFAULT_PROFILE => Settings::default(),
            None => {
                return Err(ApplicationError::Config {
                    message: format!("profile '{profile}' not found"),
                })
            }
        };
        settings.profile = profile.to_string();
        if settings.service.is_empty() {
            settings.service = Service::Cloud.to_string();
        }
        Ok(settings)
    }

    /// Apply `MCLI_*` variables as explicit overrides.
    fn apply_env_overrides(mut self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("service") {
            self.service = val;
        }
        if let Ok(val) = config.get_string("public_api_key") {
            self.public_api_key = Some(val);
        }
        if let Ok(val) = config.get_string("private_api_key") {
            self.private_api_key = Some(val);
        }
        if let Ok(val) = config.get_string("ops_manager_url") {
            self.ops_manager_url = Some(val);
        }
        if let Ok(val) = config.get_string("base_url") {
            self.base_url = Some(val);
        }
        if let Ok(val) = config.get_string("org_id") {
            self.org_id = Some(val);
        }
        if let Ok(val) = config.get_string("project_id") {
            self.project_id = Some(val);
        }
        if let Ok(val) = config.get_string("output") {
            self.output = Some(val);
        }

        Ok(self)
    }

    /// Same settings with the backend forced to `service`.
    pub fn with_service(mut self, service: Service) -> Self {
        self.service = service.to_string();
        self
    }

    pub fn org_id(&self) -> Option<&str> {
        non_empty(&self.org_id)
    }

    pub fn project_id(&self) -> Option<&str> {
        non_empty(&self.project_id)
    }

    /// API keys, if both halves are configured.
    pub fn api_keys(&self) -> Option<(&str, &str)> {
        Some((
            non_empty(&self.public_api_key)?,
            non_empty(&self.private_api_key)?,
        ))
    }

    /// Base URL for `service`: explicit override, then the service default.
    pub fn base_url_for(&self, service: Service) -> Result<String, ApplicationError> {
        if let Some(url) = non_empty(&self.base_url) {
            return Ok(url.to_string());
        }
        match service {
            Service::Cloud | Service::CloudManager => Ok(CLOUD_BASE_URL.to_string()),
            Service::OpsManager => non_empty(&self.ops_manager_url)
                .map(str::to_string)
                .ok_or_else(|| ApplicationError::Config {
                    message: format!(
                        "ops_manager_url is required for service '{}' (profile '{}')",
                        service, self.profile
                    ),
                }),
        }
    }

    /// Show the effective profile as TOML, private key masked.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        let mut shown = self.clone();
        if shown.private_api_key.is_some() {
            shown.private_api_key = Some("********".to_string());
        }
        let mut table = BTreeMap::new();
        table.insert(self.profile.clone(), shown);
        toml::to_string_pretty(&table).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# mongocli configuration
#
# One table per profile, selected with --profile/-P or MCLI_PROFILE.
# Every key can be overridden with an MCLI_* environment variable,
# e.g. MCLI_PUBLIC_API_KEY, MCLI_ORG_ID, MCLI_SERVICE.

[default]
# Backend: "cloud", "ops-manager" or "cloud-manager"
service = "cloud"

# Programmatic API key pair
# public_api_key = ""
# private_api_key = ""

# Ops Manager base URL (required for service = "ops-manager")
# ops_manager_url = "https://opsmanager.example.com:8080/"

# Default identifiers used when --orgId/--projectId are not given
# org_id = ""
# project_id = ""

# Default output format: "plain" or "json"
# output = "plain"
"#
        .to_string()
    }
}

/// `MCLI_ORG_ID` → `org_id`; double underscore separates nested keys.
fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_source(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        super::env_source().source(Some(map))
    }

    #[test]
    fn given_no_config_file_when_loading_default_profile_then_uses_defaults() {
        let settings = Settings::load_file(None, DEFAULT_PROFILE).expect("load defaults");
        assert_eq!(settings.service, "cloud");
        assert_eq!(settings.profile, DEFAULT_PROFILE);
        assert!(settings.api_keys().is_none());
    }

    #[test]
    fn given_no_config_file_when_loading_named_profile_then_fails() {
        let err = Settings::load_file(None, "prod").unwrap_err();
        assert!(err.to_string().contains("profile 'prod' not found"));
    }

    #[test]
    fn given_env_vars_when_applying_overrides_then_replace_profile_values() {
        let settings = Settings {
            org_id: Some("from-file".into()),
            ..Default::default()
        };
        let settings = settings
            .apply_env_overrides(env_source(&[
                ("MCLI_ORG_ID", "from-env"),
                ("MCLI_SERVICE", "ops-manager"),
                ("MCLI_PUBLIC_API_KEY", "pub"),
            ]))
            .unwrap();
        assert_eq!(settings.org_id(), Some("from-env"));
        assert_eq!(settings.service, "ops-manager");
        assert_eq!(settings.public_api_key.as_deref(), Some("pub"));
    }

    #[test]
    fn given_unrelated_env_vars_when_applying_overrides_then_keeps_values() {
        let settings = Settings {
            project_id: Some("p1".into()),
            ..Default::default()
        };
        let settings = settings
            .apply_env_overrides(env_source(&[("OTHER_PROJECT_ID", "p2")]))
            .unwrap();
        assert_eq!(settings.project_id(), Some("p1"));
    }

    #[test]
    fn given_empty_identifier_when_reading_then_treated_as_unset() {
        let settings = Settings {
            org_id: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(settings.org_id(), None);
    }

    #[test]
    fn given_ops_manager_without_url_when_resolving_base_url_then_fails() {
        let settings = Settings::default();
        assert!(settings.base_url_for(Service::OpsManager).is_err());
        assert_eq!(
            settings.base_url_for(Service::CloudManager).unwrap(),
            CLOUD_BASE_URL
        );
    }

    #[test]
    fn given_base_url_override_when_resolving_then_wins_for_every_service() {
        let settings = Settings {
            base_url: Some("http://127.0.0.1:9000/".into()),
            ..Default::default()
        };
        for service in Service::ALL {
            assert_eq!(
                settings.base_url_for(service).unwrap(),
                "http://127.0.0.1:9000/"
            );
        }
    }

    #[test]
    fn given_private_key_when_rendering_toml_then_masks_it() {
        let settings = Settings {
            private_api_key: Some("super-secret".into()),
            ..Default::default()
        };
        let rendered = settings.to_toml().unwrap();
        assert!(rendered.contains("[default]"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn given_template_when_parsing_then_yields_default_profile() {
        let profiles: BTreeMap<String, Settings> = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(profiles["default"].service, "cloud");
    }
}
