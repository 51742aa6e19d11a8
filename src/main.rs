//! Relink - an idempotent reference fixer for static HTML pages.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod report;
mod rewrite;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::RelinkConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = RelinkConfig::load(&cli)?;

    match &cli.command {
        Commands::Fix { args } => cli::fix::run_fix(&config, args),
        Commands::Check { args } => cli::check::run_check(&config, args),
    }
}
