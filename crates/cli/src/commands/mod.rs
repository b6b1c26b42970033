//! Subcommand implementations

pub mod config;
pub mod delete;
pub mod list;
pub mod show;
pub mod tidy;
pub mod validate;

use anyhow::{Context, Result};
use filed_recipes_adapters::store::FilesystemRecipeStore;
use filed_recipes_domain::usecases::RecipeRepository;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::AppConfig;

pub type FileRepository = RecipeRepository<FilesystemRecipeStore>;

/// Build a repository for the recipe file, without loading it
pub fn open_repository(file: Option<PathBuf>, config: &AppConfig) -> Result<FileRepository> {
    let path = file.unwrap_or_else(|| config.general.recipes_file.clone());
    let store = FilesystemRecipeStore::new(&path)
        .with_context(|| format!("Invalid recipe file path: {}", path.display()))?;

    let mut repo = RecipeRepository::new(Arc::new(store));
    repo.subscribe(|| tracing::debug!("Recipe collection changed"));
    Ok(repo)
}

/// Build and load a repository for the recipe file
pub fn load_repository(
    file: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(FileRepository, AppConfig)> {
    let config = AppConfig::load(config_path.as_deref())?;
    let mut repo = open_repository(file, &config)?;

    repo.load()
        .with_context(|| format!("Failed to load recipes from {}", repo.location()))?;

    Ok((repo, config))
}

/// Convert a 1-based recipe number from the command line to an index
pub fn index_from_number(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .context("Recipe numbers start at 1")
}
