//! Tidy command - rewrite the recipe file in canonical sorted form

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::commands::load_repository;

pub fn execute(file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (mut repo, _config) = load_repository(file, config_path)?;

    repo.save()
        .with_context(|| format!("Failed to save recipes to {}", repo.location()))?;

    println!("Rewrote {} recipes to {}", repo.len(), repo.location());

    Ok(())
}
