//! Command line parsing and one-shot commands against the mock service

mod common;

use clap::Parser;

use common::MockServer;
use tinyurl_client::cli::{Cli, Commands, ConfigCommands};
use tinyurl_client::interfaces::cli::{CliError, run_cli_command};

#[test]
fn test_no_command_starts_tui() {
    let cli = Cli::try_parse_from(["tinyurl"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.is_tui(), cfg!(feature = "tui"));
}

#[test]
fn test_parse_shorten_with_global_flags() {
    let cli = Cli::try_parse_from([
        "tinyurl",
        "shorten",
        "-u",
        "abc123",
        "example.com",
        "--api-url",
        "http://127.0.0.1:9000",
    ])
    .unwrap();

    assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:9000"));
    assert_eq!(
        cli.command,
        Some(Commands::Shorten {
            user: "abc123".into(),
            url: "example.com".into(),
        })
    );
    assert!(!cli.is_tui());
}

#[test]
fn test_parse_list_json() {
    let cli = Cli::try_parse_from(["tinyurl", "list", "--user", "abc123", "--json"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::List {
            user: "abc123".into(),
            json: true,
        })
    );
}

#[test]
fn test_parse_config_generate() {
    let cli =
        Cli::try_parse_from(["tinyurl", "-c", "my.toml", "config", "generate", "--force"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some("my.toml"));
    assert_eq!(
        cli.command,
        Some(Commands::Config {
            action: ConfigCommands::Generate {
                output_path: None,
                force: true,
            }
        })
    );
}

#[test]
fn test_delete_requires_user() {
    assert!(Cli::try_parse_from(["tinyurl", "delete", "aaa111"]).is_err());
}

#[test]
fn test_shorten_command_creates_link() {
    let server = MockServer::start();
    let cmd = Commands::Shorten {
        user: "abc123".into(),
        url: "example.com".into(),
    };
    run_cli_command(cmd, &server.client_config()).unwrap();

    let urls = server.with_state(|s| s.urls.clone());
    assert_eq!(urls.len(), 1);
    assert_eq!(urls[0].owner, "abc123");
    assert_eq!(urls[0].url, "https://example.com");
}

#[test]
fn test_invalid_user_is_rejected_before_network() {
    let server = MockServer::start();
    let cmd = Commands::List {
        user: "abc".into(),
        json: false,
    };
    let err = run_cli_command(cmd, &server.client_config()).unwrap_err();
    assert!(matches!(err, CliError::InvalidInput(_)));
    assert_eq!(server.with_state(|s| s.tokens.len()), 0);
}

#[test]
fn test_delete_command_reports_service_error() {
    let server = MockServer::start();
    let cmd = Commands::Delete {
        user: "abc123".into(),
        code: "missing".into(),
    };
    let err = run_cli_command(cmd, &server.client_config()).unwrap_err();
    assert_eq!(err.format_simple(), "Service Error: Failed to delete URL");
}

#[test]
fn test_health_command_fails_when_degraded() {
    let server = MockServer::start();
    run_cli_command(Commands::Health, &server.client_config()).unwrap();

    server.with_state(|s| s.unhealthy = true);
    assert!(run_cli_command(Commands::Health, &server.client_config()).is_err());
}
