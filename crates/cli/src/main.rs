//! filed-recipes CLI entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod args;
mod commands;
mod config;

use args::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = cli.log_level.as_deref().unwrap_or("warn");
    init_logging(log_level)?;

    // Execute command
    match cli.command {
        Commands::List(args) => commands::list::execute(args, cli.file, cli.config),
        Commands::Show(args) => commands::show::execute(args, cli.file, cli.config),
        Commands::Delete(args) => commands::delete::execute(args, cli.file, cli.config),
        Commands::Validate => commands::validate::execute(cli.file, cli.config),
        Commands::Tidy => commands::tidy::execute(cli.file, cli.config),
        Commands::Config(args) => commands::config::execute(args),
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}
