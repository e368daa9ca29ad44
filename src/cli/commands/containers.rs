//! `atlas networking containers list`

use tracing::instrument;

use crate::application::ContainersLister;
use crate::cli::args::ContainersListArgs;
use crate::cli::commands::require_project_id;
use crate::cli::output::{containers_template, Printer};
use crate::cli::CliResult;
use crate::config::Settings;
use crate::domain::{ContainersListOptions, ListOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainersListOpts {
    pub project_id: String,
    /// Provider filter; `None` lists every provider
    pub provider: Option<String>,
    pub list: ListOptions,
}

impl ContainersListOpts {
    pub fn from_args(args: &ContainersListArgs, settings: &Settings) -> CliResult<Self> {
        Ok(Self {
            project_id: require_project_id(args.project_id.as_deref(), settings)?,
            provider: args.provider.clone().filter(|p| !p.is_empty()),
            list: args.page.into(),
        })
    }

    #[instrument(skip(store, printer))]
    pub fn run(&self, store: &dyn ContainersLister, printer: &mut Printer<'_>) -> CliResult<()> {
        let containers = match &self.provider {
            None => store.all_containers(&self.project_id, &self.list)?,
            Some(provider) => store.containers_by_provider(
                &self.project_id,
                &ContainersListOptions::new(provider.as_str(), self.list),
            )?,
        };
        printer.print(containers.as_slice(), containers_template)
    }
}
