//! Show command - render one or all recipes

use anyhow::{Context, Result};
use filed_recipes_domain::usecases::Renderer;
use std::path::PathBuf;

use crate::args::ShowArgs;
use crate::commands::{index_from_number, load_repository};

pub fn execute(args: ShowArgs, file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (repo, config) = load_repository(file, config_path)?;
    let renderer = Renderer::new(config.display.render_config());

    let recipes = match args.number {
        Some(number) if !args.all => {
            let index = index_from_number(number)?;
            let recipe = repo
                .get_at(index)
                .with_context(|| format!("No recipe number {}", number))?;
            vec![recipe]
        }
        _ => repo.get_all(),
    };

    if args.json {
        if args.all {
            println!("{}", serde_json::to_string_pretty(&recipes)?);
        } else if let Some(recipe) = recipes.first() {
            println!("{}", serde_json::to_string_pretty(recipe)?);
        }
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No recipes in {}", repo.location());
        return Ok(());
    }

    println!("{}", renderer.render_all(&recipes));

    Ok(())
}
