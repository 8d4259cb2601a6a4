//! Generate config command

use std::path::Path;

use colored::Colorize;

use crate::config::{ClientConfig, DEFAULT_CONFIG_FILE};
use crate::interfaces::cli::CliError;

/// Generate example configuration file
pub fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

    if !force && Path::new(&path).exists() {
        return Err(CliError::CommandError(format!(
            "File already exists: {} (use --force to overwrite)",
            path
        )));
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );

    ClientConfig::default().save_to_file(&path).map_err(|e| {
        CliError::CommandError(format!("Unable to write configuration file: {}", e))
    })?;

    println!(
        "  {} {}",
        "Configuration file generated successfully".green(),
        path.blue()
    );
    println!(
        "  {}",
        "Values can also be set with TINYURL__SECTION__KEY environment variables".dimmed()
    );
    Ok(())
}
