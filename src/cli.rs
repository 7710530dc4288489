//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// sluglink - caller-chosen short links, map links and profile documents
#[derive(Parser, Debug)]
#[command(name = "sluglink")]
#[command(version)]
#[command(about = "A small URL shortener with caller-chosen slugs", long_about = None)]
pub struct Cli {
    /// Path to the TOML config file (default: config.toml, optional)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override server.host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Override server.port
    #[arg(long, short = 'p', global = true)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default when no command is given)
    Serve,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Apply `--host` / `--port` on top of the loaded config
    pub fn apply_overrides(&self, config: &mut crate::config::StaticConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
