//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// filed-recipes: browse and maintain a section-delimited recipe file
#[derive(Parser, Debug)]
#[command(name = "filed-recipes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Recipe file to use instead of the configured one
    #[arg(short, long, global = true, env = "FILED_RECIPES_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipe names with their numbers
    List(ListArgs),

    /// Show one recipe, or all of them
    Show(ShowArgs),

    /// Delete a recipe and save the file
    Delete(DeleteArgs),

    /// Check that the recipe file can be loaded
    Validate,

    /// Rewrite the recipe file sorted and in canonical layout
    Tidy,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Recipe number as printed by `list`
    #[arg(required_unless_present = "all")]
    pub number: Option<usize>,

    /// Show every recipe
    #[arg(long, conflicts_with = "number")]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Recipe number as printed by `list`
    pub number: usize,

    /// Report what would be deleted without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./config.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}
