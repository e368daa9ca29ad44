//! `iam organizations apiKeys list|describe`, `iam projects apiKeys list`

use tracing::instrument;

use crate::application::{
    OrganizationApiKeyDescriber, OrganizationApiKeyLister, ProjectApiKeyLister,
};
use crate::cli::args::{OrgApiKeysDescribeArgs, OrgApiKeysListArgs, ProjectApiKeysListArgs};
use crate::cli::commands::{require_org_id, require_project_id};
use crate::cli::output::{api_key_template, api_keys_template, Printer};
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::ListOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgApiKeysListOpts {
    pub org_id: String,
    pub list: ListOptions,
}

impl OrgApiKeysListOpts {
    pub fn from_args(args: &OrgApiKeysListArgs, settings: &Settings) -> CliResult<Self> {
        Ok(Self {
            org_id: require_org_id(args.org_id.as_deref(), settings)?,
            list: args.page.into(),
        })
    }

    #[instrument(skip(store, printer))]
    pub fn run(
        &self,
        store: &dyn OrganizationApiKeyLister,
        printer: &mut Printer<'_>,
    ) -> CliResult<()> {
        let keys = store.organization_api_keys(&self.org_id, &self.list)?;
        printer.print(keys.as_slice(), api_keys_template)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgApiKeysDescribeOpts {
    pub org_id: String,
    pub api_key_id: String,
}

impl OrgApiKeysDescribeOpts {
    pub fn from_args(args: &OrgApiKeysDescribeArgs, settings: &Settings) -> CliResult<Self> {
        if args.id.is_empty() {
            return Err(CliError::InvalidArgs("API key ID must not be empty".into()));
        }
        Ok(Self {
            org_id: require_org_id(args.org_id.as_deref(), settings)?,
            api_key_id: args.id.clone(),
        })
    }

    #[instrument(skip(store, printer))]
    pub fn run(
        &self,
        store: &dyn OrganizationApiKeyDescriber,
        printer: &mut Printer<'_>,
    ) -> CliResult<()> {
        let key = store.organization_api_key(&self.org_id, &self.api_key_id)?;
        printer.print(&key, api_key_template)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectApiKeysListOpts {
    pub project_id: String,
    pub list: ListOptions,
}

impl ProjectApiKeysListOpts {
    pub fn from_args(args: &ProjectApiKeysListArgs, settings: &Settings) -> CliResult<Self> {
        Ok(Self {
            project_id: require_project_id(args.project_id.as_deref(), settings)?,
            list: args.page.into(),
        })
    }

    #[instrument(skip(store, printer))]
    pub fn run(&self, store: &dyn ProjectApiKeyLister, printer: &mut Printer<'_>) -> CliResult<()> {
        let keys = store.project_api_keys(&self.project_id, &self.list)?;
        printer.print(keys.as_slice(), api_keys_template)
    }
}
