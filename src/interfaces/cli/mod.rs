//! CLI interface module
//!
//! One gateway operation per invocation. Commands that touch user data sign
//! in first; the session dies with the process.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::ClientConfig;
use crate::errors::ClientError;
use commands::{config_generate, delete_url, list_urls, service_health, shorten_url};

#[derive(Debug)]
pub enum CliError {
    /// Failure reported by the client layer
    Client(ClientError),
    /// Bad arguments caught before any request
    InvalidInput(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::Client(err) => err.format_simple(),
            CliError::InvalidInput(msg) => format!("Invalid input: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::Client(err) => err.format_colored(),
            CliError::InvalidInput(msg) => {
                format!("{} {}", "Invalid input:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        CliError::Client(err)
    }
}

/// Commands that run without a loaded config
pub fn run_config_command(action: ConfigCommands) -> Result<(), CliError> {
    match action {
        ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &ClientConfig) -> Result<(), CliError> {
    match cmd {
        Commands::Shorten { user, url } => shorten_url(config, &user, &url),
        Commands::List { user, json } => list_urls(config, &user, json),
        Commands::Delete { user, code } => delete_url(config, &user, &code),
        Commands::Health => service_health(config),
        Commands::Config { action } => run_config_command(action),
        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI is started from main".to_string(),
        )),
    }
}
