//! Delete command - remove a recipe and save the file

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::args::DeleteArgs;
use crate::commands::{index_from_number, load_repository};

pub fn execute(
    args: DeleteArgs,
    file: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (mut repo, _config) = load_repository(file, config_path)?;
    let index = index_from_number(args.number)?;

    let removed = repo
        .delete_at(index)
        .with_context(|| format!("No recipe number {}", args.number))?;

    if args.dry_run {
        tracing::info!(name = %removed.name(), "Dry run, recipe file left unchanged");
        println!("Would delete '{}' (dry run)", removed.name());
        return Ok(());
    }

    repo.save()
        .with_context(|| format!("Failed to save recipes to {}", repo.location()))?;

    println!("Deleted '{}' ({} recipes left)", removed.name(), repo.len());

    Ok(())
}
