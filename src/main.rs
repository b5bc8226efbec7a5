//! Folio - a config-driven single-page portfolio site.

mod cli;
mod config;
mod core;
mod embed;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Paths;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let paths = Paths::from_config_path(cli.config.clone());

    match &cli.command {
        Commands::Serve {
            interface,
            port,
            verbose,
        } => {
            logger::set_verbose(*verbose);
            cli::serve::serve(
                &paths,
                interface.unwrap_or(cli::serve::DEFAULT_INTERFACE),
                port.unwrap_or(cli::serve::DEFAULT_PORT),
            )
        }
        Commands::Build { verbose } => {
            logger::set_verbose(*verbose);
            cli::build::build_site(&paths).map(|_| ())
        }
        Commands::Deploy { no_git } => cli::deploy::deploy_site(&paths, *no_git),
    }
}
