//! Command dispatch
//!
//! Each leaf command is a record built from its flags and the active profile
//! (identifier resolution and validation), then run against one store
//! capability. The store itself is only built once validation passed.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::debug;

use crate::application::ApplicationError;
use crate::cli::args::{
    AtlasCommands, Cli, Commands, ContainersCommands, IamCommands, LinkCommands,
    LiveMigrationsCommands, ManagerCommands, NetworkingCommands, OrgApiKeysCommands,
    OrganizationsCommands, PageArgs, ProjectApiKeysCommands, ProjectsCommands,
};
use crate::cli::output::{OutputFormat, Printer};
use crate::cli::CliResult;
use crate::config::Settings;
use crate::domain::{ListOptions, Service};
use crate::infrastructure::di::ServiceContainer;

pub mod api_keys;
pub mod config;
pub mod containers;
pub mod link;

pub use api_keys::{OrgApiKeysDescribeOpts, OrgApiKeysListOpts, ProjectApiKeysListOpts};
pub use containers::ContainersListOpts;
pub use link::LinkCreateOpts;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Atlas { command } => atlas(cli, command),
        Commands::OpsManager { command } => manager(cli, Service::OpsManager, command),
        Commands::CloudManager { command } => manager(cli, Service::CloudManager, command),
        Commands::Iam { command } => iam(cli, command),
        Commands::Config { command } => config::execute(command, &cli.profile),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn atlas(cli: &Cli, command: &AtlasCommands) -> CliResult<()> {
    match command {
        AtlasCommands::Networking {
            command:
                NetworkingCommands::Containers {
                    command: ContainersCommands::List(args),
                },
        } => with_container(cli, Some(Service::Cloud), |container, printer| {
            let opts = ContainersListOpts::from_args(args, &container.settings)?;
            opts.run(&container.store()?, printer)
        }),
    }
}

fn manager(cli: &Cli, service: Service, command: &ManagerCommands) -> CliResult<()> {
    match command {
        ManagerCommands::LiveMigrations {
            command:
                LiveMigrationsCommands::Link {
                    command: LinkCommands::Create(args),
                },
        } => with_container(cli, Some(service), |container, printer| {
            let opts = LinkCreateOpts::from_args(args, &container.settings)?;
            opts.run(&container.store()?, printer)
        }),
    }
}

fn iam(cli: &Cli, command: &IamCommands) -> CliResult<()> {
    match command {
        IamCommands::Organizations {
            command: OrganizationsCommands::ApiKeys { command },
        } => match command {
            OrgApiKeysCommands::List(args) => with_container(cli, None, |container, printer| {
                let opts = OrgApiKeysListOpts::from_args(args, &container.settings)?;
                opts.run(&container.store()?, printer)
            }),
            OrgApiKeysCommands::Describe(args) => {
                with_container(cli, None, |container, printer| {
                    let opts = OrgApiKeysDescribeOpts::from_args(args, &container.settings)?;
                    opts.run(&container.store()?, printer)
                })
            }
        },
        IamCommands::Projects {
            command:
                ProjectsCommands::ApiKeys {
                    command: ProjectApiKeysCommands::List(args),
                },
        } => with_container(cli, None, |container, printer| {
            let opts = ProjectApiKeysListOpts::from_args(args, &container.settings)?;
            opts.run(&container.store()?, printer)
        }),
    }
}

/// Load the profile, optionally force the service, and hand a printer on
/// stdout to `run`.
fn with_container<F>(cli: &Cli, service: Option<Service>, run: F) -> CliResult<()>
where
    F: FnOnce(&ServiceContainer, &mut Printer<'_>) -> CliResult<()>,
{
    let mut settings = Settings::load(&cli.profile)?;
    if let Some(service) = service {
        settings = settings.with_service(service);
    }
    let format = match cli.output {
        Some(format) => format,
        None => profile_output_format(&settings)?,
    };
    debug!(profile = %settings.profile, service = %settings.service, ?format, "command setup");

    let container = ServiceContainer::new(settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut printer = Printer::new(format, &mut out);
    run(&container, &mut printer)
}

/// Default output format from the profile; a bad value is a config error.
pub fn profile_output_format(settings: &Settings) -> Result<OutputFormat, ApplicationError> {
    let raw = settings.output.as_deref().unwrap_or_default();
    raw.parse::<OutputFormat>().map_err(|_| ApplicationError::Config {
        message: format!(
            "unsupported output '{raw}' in profile '{}' (expected plain or json)",
            settings.profile
        ),
    })
}

/// Flag value if non-empty, else the profile's project.
pub fn require_project_id(
    flag: Option<&str>,
    settings: &Settings,
) -> Result<String, ApplicationError> {
    flag.filter(|id| !id.is_empty())
        .or_else(|| settings.project_id())
        .map(str::to_string)
        .ok_or(ApplicationError::MissingProjectId)
}

/// Flag value if non-empty, else the profile's organization.
pub fn require_org_id(
    flag: Option<&str>,
    settings: &Settings,
) -> Result<String, ApplicationError> {
    flag.filter(|id| !id.is_empty())
        .or_else(|| settings.org_id())
        .map(str::to_string)
        .ok_or(ApplicationError::MissingOrgId)
}

impl From<PageArgs> for ListOptions {
    fn from(page: PageArgs) -> Self {
        ListOptions::new(page.page, page.limit)
    }
}
