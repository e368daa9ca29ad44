//! `config show|path|init`

use std::path::Path;

use crate::application::ApplicationError;
use crate::cli::args::ConfigCommands;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};

pub fn execute(command: &ConfigCommands, profile: &str) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(profile)?;
            output::info(settings.to_toml()?.trim_end());
            Ok(())
        }
        ConfigCommands::Path => {
            output::info(&config_path()?.display());
            Ok(())
        }
        ConfigCommands::Init => {
            let path = config_path()?;
            init_config(&path)?;
            output::success(&format!("Created {}", path.display()));
            Ok(())
        }
    }
}

fn config_path() -> CliResult<std::path::PathBuf> {
    global_config_path()
        .ok_or_else(|| CliError::InvalidArgs("cannot determine config directory".into()))
}

/// Write the template to `path`; never overwrites an existing file.
pub fn init_config(path: &Path) -> Result<(), ApplicationError> {
    if path.exists() {
        return Err(ApplicationError::Config {
            message: format!("config file already exists: {}", path.display()),
        });
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ApplicationError::Config {
            message: format!("create {}: {}", parent.display(), e),
        })?;
    }
    std::fs::write(path, Settings::template()).map_err(|e| ApplicationError::Config {
        message: format!("write {}: {}", path.display(), e),
    })
}
