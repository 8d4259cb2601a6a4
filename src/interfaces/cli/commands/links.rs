//! shorten / list / delete

use colored::Colorize;
use tracing::debug;

use crate::client::{ApiGateway, ShortUrlApi};
use crate::config::ClientConfig;
use crate::interfaces::cli::CliError;
use crate::session::SessionStore;
use crate::utils::{normalize_url, truncate_display, validate_user_id};

/// Validate `user` locally, then exchange it for a fresh session
fn sign_in(config: &ClientConfig, user: &str) -> Result<ApiGateway, CliError> {
    let user_id = validate_user_id(user).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let gateway = ApiGateway::new(&config.api, SessionStore::new());
    gateway.generate_token(user_id)?;
    debug!("Signed in against {}", gateway.base_url());
    Ok(gateway)
}

pub fn shorten_url(config: &ClientConfig, user: &str, url: &str) -> Result<(), CliError> {
    let url = normalize_url(url).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let gateway = sign_in(config, user)?;
    let created = gateway.create_url(&url)?;

    let headline = if created.existed {
        "URL Retrieved".yellow().bold()
    } else {
        "URL Created Successfully!".green().bold()
    };
    println!("{} {}", "✓".green().bold(), headline);
    println!(
        "  {}    {}",
        "Short URL:".cyan(),
        created.record.short_url.bold()
    );
    println!(
        "  {} {}",
        "Original URL:".cyan(),
        created.record.original_url.blue().underline()
    );
    println!(
        "  {}      {}",
        "Created:".cyan(),
        created.record.created_display().dimmed()
    );
    Ok(())
}

pub fn list_urls(config: &ClientConfig, user: &str, json: bool) -> Result<(), CliError> {
    let gateway = sign_in(config, user)?;
    let records = gateway.list_urls()?;

    if json {
        let output = serde_json::to_string_pretty(&records)
            .map_err(|e| CliError::CommandError(format!("Failed to encode JSON: {}", e)))?;
        println!("{}", output);
        return Ok(());
    }

    if records.is_empty() {
        println!("{} No short URLs yet", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "My URLs:".bold().green());
    println!();
    for record in &records {
        println!(
            "  {} {} -> {} {}",
            record.code.cyan(),
            record.short_url.bold(),
            truncate_display(&record.original_url, config.ui.url_truncate_length)
                .blue()
                .underline(),
            format!("({})", record.created_display()).dimmed()
        );
    }
    println!();
    println!(
        "{} Total {} short URLs",
        "ℹ".bold().blue(),
        records.len().to_string().green()
    );
    Ok(())
}

pub fn delete_url(config: &ClientConfig, user: &str, code: &str) -> Result<(), CliError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(CliError::InvalidInput("Short code is required".to_string()));
    }
    let gateway = sign_in(config, user)?;
    gateway.delete_url(code)?;
    println!("{} Deleted {}", "✓".green().bold(), code.cyan());
    Ok(())
}
