//! `ops-manager|cloud-manager liveMigrations link create`

use tracing::instrument;

use crate::application::OrganizationsConnector;
use crate::cli::args::LinkCreateArgs;
use crate::cli::commands::require_org_id;
use crate::cli::output::Printer;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::LinkToken;

const CREATE_TEMPLATE: &str = "Organization link successfully created.";

#[derive(Clone, PartialEq, Eq)]
pub struct LinkCreateOpts {
    pub org_id: String,
    pub link_token: String,
}

impl std::fmt::Debug for LinkCreateOpts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkCreateOpts")
            .field("org_id", &self.org_id)
            .finish_non_exhaustive()
    }
}

impl LinkCreateOpts {
    pub fn from_args(args: &LinkCreateArgs, settings: &Settings) -> CliResult<Self> {
        if args.link_token.is_empty() {
            return Err(CliError::InvalidArgs("--linkToken must not be empty".into()));
        }
        Ok(Self {
            org_id: require_org_id(args.org_id.as_deref(), settings)?,
            link_token: args.link_token.clone(),
        })
    }

    /// Request payload: the token exactly as given.
    pub fn request(&self) -> LinkToken {
        LinkToken::new(self.link_token.clone())
    }

    #[instrument(skip(store, printer))]
    pub fn run(
        &self,
        store: &dyn OrganizationsConnector,
        printer: &mut Printer<'_>,
    ) -> CliResult<()> {
        let status = store.connect_organizations(&self.org_id, &self.request())?;
        printer.print(&status, |_| CREATE_TEMPLATE.to_string())
    }
}
