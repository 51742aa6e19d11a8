//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Relink HTML reference fixer CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: relink.toml)
    #[arg(short = 'C', long, default_value = "relink.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Apply the rule set and rewrite pages in place
    #[command(visible_alias = "f")]
    Fix {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Dry run: report pages that would change, write nothing
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: RunArgs,
    },
}

/// Shared arguments for Fix and Check commands
#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Directory the page paths are resolved against
    /// (default: the config file's directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
