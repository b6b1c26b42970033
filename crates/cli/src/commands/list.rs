//! List command - numbered recipe names

use anyhow::Result;
use filed_recipes_domain::usecases::Renderer;
use std::path::PathBuf;

use crate::args::ListArgs;
use crate::commands::load_repository;

pub fn execute(args: ListArgs, file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (repo, config) = load_repository(file, config_path)?;
    let recipes = repo.get_all();

    if args.json {
        let entries: Vec<_> = recipes
            .iter()
            .enumerate()
            .map(|(index, recipe)| {
                serde_json::json!({
                    "number": index + 1,
                    "name": recipe.name(),
                    "ingredients": recipe.ingredients().len(),
                    "instructions": recipe.instructions().len(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No recipes in {}", repo.location());
        return Ok(());
    }

    let renderer = Renderer::new(config.display.render_config());
    println!("{}", renderer.render_index(&recipes));

    Ok(())
}
