//! Routes parsed arguments to their handlers.

pub mod render;
pub mod templates;
pub mod validate;

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::error::CliError;
use crate::render::helpers::read_string;
use crate::settings::{load_settings, settings_path};

pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let path = settings_path(cli.config.as_deref());
    let settings = load_settings(&path).map_err(CliError::Settings)?;
    debug!(path = %path.display(), ?settings, "settings loaded");

    match cli.command {
        Commands::Render(args) => render::run(&args, &settings),
        Commands::Validate(args) => validate::run(&args),
        Commands::Templates => {
            templates::run();
            Ok(())
        }
    }
}

/// Reads the course document from a file, or from stdin for `-`.
pub fn read_input(input: &Path) -> Result<String, CliError> {
    if input.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(|e| CliError::Io(format!("Unable to read stdin: {e}")))?;
        return Ok(raw);
    }
    read_string(input).map_err(CliError::Io)
}
