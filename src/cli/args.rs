//! Command-line interface definitions.

use crate::config::CONFIG_FILE;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Folio portfolio generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: config.json)
    #[arg(short = 'C', long, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the development server (re-renders on every request)
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },

    /// Render the page once and write docs/index.html
    #[command(visible_alias = "b")]
    Build {
        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },

    /// Build, commit and push, then deploy to the hosting platform
    #[command(visible_alias = "d")]
    Deploy {
        /// Skip the git commit/push stage
        #[arg(long)]
        no_git: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["folio", "build"]);
        assert_eq!(cli.config, PathBuf::from("config.json"));
        assert!(matches!(cli.command, Commands::Build { verbose: false }));
    }

    #[test]
    fn test_serve_alias_and_port() {
        let cli = Cli::parse_from(["folio", "s", "-p", "8080"]);
        match cli.command {
            Commands::Serve { port, .. } => assert_eq!(port, Some(8080)),
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn test_config_override() {
        let cli = Cli::parse_from(["folio", "-C", "site/config.json", "b"]);
        assert_eq!(cli.config, PathBuf::from("site/config.json"));
    }
}
