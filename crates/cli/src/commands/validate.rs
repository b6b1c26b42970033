//! Validate command - check that the recipe file loads

use anyhow::Result;
use std::path::PathBuf;

use crate::commands::open_repository;
use crate::config::AppConfig;

pub fn execute(file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let mut repo = open_repository(file, &config)?;

    println!("Validating recipes in: {}", repo.location());

    match repo.load() {
        Ok(()) => {
            println!("✓ Validation passed ({} recipes)", repo.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Validation failed: {}", e);
            std::process::exit(1);
        }
    }
}
