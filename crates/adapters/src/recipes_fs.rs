//! Filesystem-based recipe store

use filed_recipes_domain::{
    Recipe, RecipeStore, RecipeStoreError, parse_recipes, serialize_recipes,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Recipe store backed by a single text file
pub struct FsRecipeStore {
    path: PathBuf,
}

impl FsRecipeStore {
    /// Create a store for `path`, resolved to an absolute path now
    ///
    /// The file itself does not need to exist yet.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, RecipeStoreError> {
        let raw = path.as_ref();

        let path = std::path::absolute(raw).map_err(|e| RecipeStoreError::InvalidPath {
            path: raw.display().to_string(),
            message: e.to_string(),
        })?;

        if path.file_name().is_none() {
            return Err(RecipeStoreError::InvalidPath {
                path: raw.display().to_string(),
                message: "Path does not name a file".to_string(),
            });
        }

        Ok(Self { path })
    }

    /// File a save replaces: the link target when the path is a symlink
    fn write_target(&self) -> PathBuf {
        std::fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    fn io_error(&self, source: std::io::Error) -> RecipeStoreError {
        RecipeStoreError::Io {
            path: self.location(),
            source,
        }
    }

    fn format_error(&self, source: filed_recipes_domain::FormatError) -> RecipeStoreError {
        RecipeStoreError::Format {
            path: self.location(),
            source,
        }
    }
}

impl RecipeStore for FsRecipeStore {
    fn read(&self) -> Result<Vec<Recipe>, RecipeStoreError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;

        tracing::debug!(
            path = %self.path.display(),
            bytes = content.len(),
            "Read recipe file"
        );

        parse_recipes(&content).map_err(|e| self.format_error(e))
    }

    fn write(&self, recipes: &[Recipe]) -> Result<(), RecipeStoreError> {
        // Serialize first so a rejected collection never touches the file
        let text = serialize_recipes(recipes).map_err(|e| self.format_error(e))?;

        let target = self.write_target();
        let dir = target.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        temp.write_all(text.as_bytes()).map_err(|e| self.io_error(e))?;
        temp.as_file().sync_all().map_err(|e| self.io_error(e))?;

        if let Ok(metadata) = std::fs::metadata(&target) {
            if let Err(e) = std::fs::set_permissions(temp.path(), metadata.permissions()) {
                tracing::warn!(error = %e, "Failed to carry over recipe file permissions");
            }
        }

        temp.persist(&target).map_err(|e| self.io_error(e.error))?;

        tracing::debug!(
            path = %self.path.display(),
            bytes = text.len(),
            recipes = recipes.len(),
            "Wrote recipe file"
        );

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filed_recipes_domain::{FormatError, Ingredient};
    use tempfile::TempDir;

    fn setup_test_dir() -> TempDir {
        TempDir::new().unwrap()
    }

    #[test]
    fn test_read_recipe_file() {
        let dir = setup_test_dir();
        let path = dir.path().join("recipes.txt");
        std::fs::write(
            &path,
            "[Recept]\nPancakes\n\n[Ingredienser]\n2;dl;flour\n3;st;eggs\n\n\
             [Instruktioner]\nMix ingredients.\nFry.\n",
        )
        .unwrap();

        let store = FsRecipeStore::new(&path).unwrap();
        let recipes = store.read().unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name(), "Pancakes");
        assert_eq!(recipes[0].ingredients()[1], Ingredient::new("3", "st", "eggs"));
        assert_eq!(recipes[0].instructions(), ["Mix ingredients.", "Fry."]);
    }

    #[test]
    fn test_read_empty_file() {
        let dir = setup_test_dir();
        let path = dir.path().join("recipes.txt");
        std::fs::write(&path, "").unwrap();

        let store = FsRecipeStore::new(&path).unwrap();
        assert!(store.read().unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = setup_test_dir();
        let store = FsRecipeStore::new(dir.path().join("missing.txt")).unwrap();

        let err = store.read().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_malformed_file_reports_path() {
        let dir = setup_test_dir();
        let path = dir.path().join("recipes.txt");
        std::fs::write(&path, "[Recept]\nBread\n[Ingredienser]\n1;kg\n").unwrap();

        let store = FsRecipeStore::new(&path).unwrap();
        let err = store.read().unwrap_err();

        assert_eq!(
            err.format_error(),
            Some(&FormatError::MalformedIngredient { line: 4, fields: 2 })
        );
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_write_then_read() {
        let dir = setup_test_dir();
        let store = FsRecipeStore::new(dir.path().join("recipes.txt")).unwrap();
        let recipes = vec![
            Recipe::new("Waffles")
                .with_ingredient(Ingredient::new("3", "dl", "flour"))
                .with_instruction("Bake."),
            Recipe::new("Tea").with_instruction("Steep."),
        ];

        store.write(&recipes).unwrap();

        assert_eq!(store.read().unwrap(), recipes);
    }

    #[test]
    fn test_write_replaces_previous_content() {
        let dir = setup_test_dir();
        let path = dir.path().join("recipes.txt");
        std::fs::write(&path, "[Recept]\nOld\n".repeat(20)).unwrap();

        let store = FsRecipeStore::new(&path).unwrap();
        store.write(&[Recipe::new("New")]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("Old"));
        assert_eq!(store.read().unwrap(), vec![Recipe::new("New")]);
    }

    #[test]
    fn test_write_rejected_collection_leaves_file_alone() {
        let dir = setup_test_dir();
        let path = dir.path().join("recipes.txt");
        std::fs::write(&path, "[Recept]\nKeep me\n").unwrap();

        let store = FsRecipeStore::new(&path).unwrap();
        let bad = Recipe::new("Bad").with_ingredient(Ingredient::new("1", "", "a;b"));
        let err = store.write(&[bad]).unwrap_err();

        assert!(err.format_error().is_some());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[Recept]\nKeep me\n");
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = setup_test_dir();
        let store = FsRecipeStore::new(dir.path().join("nope").join("recipes.txt")).unwrap();

        let err = store.write(&[Recipe::new("Tea")]).unwrap_err();
        assert!(matches!(err, RecipeStoreError::Io { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_through_symlink_updates_target() {
        let dir = setup_test_dir();
        let target = dir.path().join("real.txt");
        let link = dir.path().join("recipes.txt");
        std::fs::write(&target, "[Recept]\nOld\n").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let store = FsRecipeStore::new(&link).unwrap();
        store.write(&[Recipe::new("New")]).unwrap();

        assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert!(std::fs::read_to_string(&target).unwrap().contains("New"));
        assert_eq!(store.read().unwrap(), vec![Recipe::new("New")]);
    }

    #[test]
    fn test_relative_path_is_made_absolute() {
        let store = FsRecipeStore::new("recipes.txt").unwrap();
        let location = PathBuf::from(store.location());

        assert!(location.is_absolute());
        assert!(location.ends_with("recipes.txt"));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let result = FsRecipeStore::new("");
        assert!(matches!(result, Err(RecipeStoreError::InvalidPath { .. })));
    }
}
