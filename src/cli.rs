//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// tinyurl - terminal client for the TinyURL link service
#[derive(Parser, Debug)]
#[command(name = "tinyurl")]
#[command(version)]
#[command(about = "Terminal client for the TinyURL link service", long_about = None)]
pub struct Cli {
    /// Config file (default: tinyurl.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override the service base URL (e.g. http://localhost:8080)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive terminal UI (default)
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten a URL
    ///
    /// A missing scheme is completed with https://
    Shorten {
        /// 6-character user ID to sign in with
        #[arg(long, short = 'u')]
        user: String,

        /// URL to shorten
        url: String,
    },

    /// List your short URLs
    List {
        /// 6-character user ID to sign in with
        #[arg(long, short = 'u')]
        user: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete one of your short URLs
    Delete {
        /// 6-character user ID to sign in with
        #[arg(long, short = 'u')]
        user: String,

        /// Short code to delete
        code: String,
    },

    /// Show service health
    Health,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: tinyurl.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// True when this invocation should start the terminal UI
    pub fn is_tui(&self) -> bool {
        match &self.command {
            None => cfg!(feature = "tui"),
            #[cfg(feature = "tui")]
            Some(Commands::Tui) => true,
            Some(_) => false,
        }
    }
}
