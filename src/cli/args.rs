//! CLI argument definitions using clap

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::cli::output::OutputFormat;
use crate::config::DEFAULT_PROFILE;

/// Command line client for MongoDB Atlas, Cloud Manager and Ops Manager
#[derive(Parser, Debug)]
#[command(name = "mongocli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug logging to stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Profile to read settings from
    #[arg(short = 'P', long, global = true, env = "MCLI_PROFILE", default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Output format (default: profile `output`, else plain)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// MongoDB Atlas operations
    Atlas {
        #[command(subcommand)]
        command: AtlasCommands,
    },

    /// Ops Manager operations
    #[command(name = "ops-manager", visible_alias = "om")]
    OpsManager {
        #[command(subcommand)]
        command: ManagerCommands,
    },

    /// Cloud Manager operations
    #[command(name = "cloud-manager", visible_alias = "cm")]
    CloudManager {
        #[command(subcommand)]
        command: ManagerCommands,
    },

    /// Organization and project access management (uses the profile's service)
    Iam {
        #[command(subcommand)]
        command: IamCommands,
    },

    /// Manage profiles
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Pagination flags shared by list commands.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PageArgs {
    /// Page number
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Number of items per page
    #[arg(long, default_value_t = 0)]
    pub limit: u32,
}

#[derive(Subcommand, Debug)]
pub enum AtlasCommands {
    /// Networking operations
    Networking {
        #[command(subcommand)]
        command: NetworkingCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum NetworkingCommands {
    /// Network peering containers
    #[command(visible_alias = "container")]
    Containers {
        #[command(subcommand)]
        command: ContainersCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContainersCommands {
    /// List network peering containers of a project
    #[command(visible_alias = "ls")]
    List(ContainersListArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ContainersListArgs {
    /// Cloud provider (AWS, AZURE, GCP); lists every provider when omitted
    #[arg(long)]
    pub provider: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,

    /// Project ID (default: profile `project_id`)
    #[arg(long = "projectId")]
    pub project_id: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ManagerCommands {
    /// Live migration operations
    #[command(name = "liveMigrations", visible_alias = "lm")]
    LiveMigrations {
        #[command(subcommand)]
        command: LiveMigrationsCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum LiveMigrationsCommands {
    /// Organization links for live migration
    Link {
        #[command(subcommand)]
        command: LinkCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum LinkCommands {
    /// Create one new organization link.
    ///
    /// Your API Key must have the Organization Owner role to successfully run this command.
    Create(LinkCreateArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct LinkCreateArgs {
    /// Link token generated in Atlas
    #[arg(long = "linkToken", required = true)]
    pub link_token: String,

    /// Organization ID (default: profile `org_id`)
    #[arg(long = "orgId")]
    pub org_id: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum IamCommands {
    /// Organization operations
    #[command(visible_aliases = ["orgs", "org"])]
    Organizations {
        #[command(subcommand)]
        command: OrganizationsCommands,
    },

    /// Project operations
    #[command(visible_alias = "project")]
    Projects {
        #[command(subcommand)]
        command: ProjectsCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrganizationsCommands {
    /// Organization API keys
    #[command(name = "apiKeys", visible_alias = "apikeys")]
    ApiKeys {
        #[command(subcommand)]
        command: OrgApiKeysCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrgApiKeysCommands {
    /// List API keys of an organization
    #[command(visible_alias = "ls")]
    List(OrgApiKeysListArgs),

    /// Describe one API key of an organization
    Describe(OrgApiKeysDescribeArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct OrgApiKeysListArgs {
    /// Organization ID (default: profile `org_id`)
    #[arg(long = "orgId")]
    pub org_id: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OrgApiKeysDescribeArgs {
    /// API key ID
    pub id: String,

    /// Organization ID (default: profile `org_id`)
    #[arg(long = "orgId")]
    pub org_id: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ProjectsCommands {
    /// Project API keys
    #[command(name = "apiKeys", visible_alias = "apikeys")]
    ApiKeys {
        #[command(subcommand)]
        command: ProjectApiKeysCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectApiKeysCommands {
    /// List API keys assigned to a project
    #[command(visible_alias = "ls")]
    List(ProjectApiKeysListArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProjectApiKeysListArgs {
    /// Project ID (default: profile `project_id`)
    #[arg(long = "projectId")]
    pub project_id: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the selected profile (private key masked)
    Show,

    /// Show config file path
    Path,

    /// Create config template
    Init,
}
