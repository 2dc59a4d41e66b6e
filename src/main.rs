//! tetris-guide - A renderer for Tetris strategy guides with inline boards.

mod board;
mod cli;
mod config;
mod content;
mod core;
mod embed;
mod logger;
mod page;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

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
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Serve { .. } => cli::serve::serve_site(&SiteConfig::load(&cli)?),
        Commands::Build { .. } => cli::build::build_site(&SiteConfig::load(&cli)?),
        Commands::Check => cli::check::run_check(&SiteConfig::load(&cli)?),
        Commands::List { json, pretty } => {
            cli::list::list_pages(&SiteConfig::load(&cli)?, *json, *pretty)
        }
        // Works on a single image and needs no project
        Commands::Import {
            input,
            output,
            pieces,
            threshold,
            force,
        } => cli::import::import_board(
            input,
            output.as_deref(),
            pieces.as_deref(),
            *threshold,
            *force,
        )
        .map(|_| ()),
    }
}
