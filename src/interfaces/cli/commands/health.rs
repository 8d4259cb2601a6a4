use colored::Colorize;

use crate::client::ApiGateway;
use crate::config::ClientConfig;
use crate::interfaces::cli::CliError;
use crate::session::SessionStore;

/// Print `GET /api/healthz`; a failed check is a command failure
pub fn service_health(config: &ClientConfig) -> Result<(), CliError> {
    let gateway = ApiGateway::new(&config.api, SessionStore::new());
    let report = gateway.health()?;

    let status = if report.is_ok() {
        report.status.green().bold()
    } else {
        report.status.red().bold()
    };
    println!("{} {}", "Service".bold(), gateway.base_url().blue());
    println!("  {}: {}", "Status".cyan(), status);
    for (name, state) in &report.checks {
        let state = if state.eq_ignore_ascii_case("ok") {
            state.green()
        } else {
            state.red()
        };
        println!("  {}: {}", name.cyan(), state);
    }

    if report.is_ok() {
        Ok(())
    } else {
        Err(CliError::CommandError(format!(
            "Service is unhealthy ({})",
            report.status
        )))
    }
}
