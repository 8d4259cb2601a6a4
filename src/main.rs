use anyhow::Context;
use clap::Parser;
use tracing::debug;

use tinyurl_client::cli::{Cli, Commands};
use tinyurl_client::config::ClientConfig;
use tinyurl_client::interfaces::cli::{CliError, run_cli_command, run_config_command};
use tinyurl_client::system::{RunMode, init_logging, install_panic_hook};

fn main() {
    if let Err(err) = run() {
        match err.downcast_ref::<CliError>() {
            Some(cli_err) => eprintln!("{}", cli_err.format_colored()),
            None => eprintln!("{:#}", err),
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // config generate must work even when the current config is broken
    if let Some(Commands::Config { action }) = &cli.command {
        return run_config_command(action.clone()).map_err(Into::into);
    }

    let mode = if cli.is_tui() {
        RunMode::Tui
    } else {
        RunMode::Cli
    };
    install_panic_hook(mode);

    let config = ClientConfig::load(cli.config.as_deref())
        .and_then(|config| config.with_api_url(cli.api_url.as_deref()))
        .context("Failed to load configuration")?;

    let _guard = init_logging(&config.logging, mode).context("Failed to initialize logging")?;
    debug!("Using service at {}", config.api.base_url);

    match cli.command {
        Some(cmd) if mode == RunMode::Cli => run_cli_command(cmd, &config)?,
        _ => run_tui(&config)?,
    }
    Ok(())
}

#[cfg(feature = "tui")]
fn run_tui(config: &ClientConfig) -> anyhow::Result<()> {
    use tinyurl_client::session::SessionStore;

    tinyurl_client::interfaces::tui::run_tui(config, SessionStore::new())
        .context("Terminal UI failed")
}

#[cfg(not(feature = "tui"))]
fn run_tui(_config: &ClientConfig) -> anyhow::Result<()> {
    anyhow::bail!("no command given; this build has no terminal UI (see --help)")
}
