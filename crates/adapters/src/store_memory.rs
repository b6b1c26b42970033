//! In-memory recipe store for testing and offline mode

use filed_recipes_domain::{
    Recipe, RecipeStore, RecipeStoreError, parse_recipes, serialize_recipes,
};
use std::sync::RwLock;

const LOCATION: &str = "memory";

/// In-memory recipe store holding the file text
///
/// Goes through the same parser and serializer as the file store. An empty
/// store behaves like a missing file.
pub struct InMemoryRecipeStore {
    content: RwLock<Option<String>>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self {
            content: RwLock::new(None),
        }
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: RwLock::new(Some(content.into())),
        }
    }

    /// Current text, if anything has been stored
    pub fn content(&self) -> Result<Option<String>, RecipeStoreError> {
        let content = self.content.read().map_err(|e| lock_error(e.to_string()))?;
        Ok(content.clone())
    }

    pub fn set_content(&self, text: impl Into<String>) -> Result<(), RecipeStoreError> {
        let mut content = self
            .content
            .write()
            .map_err(|e| lock_error(e.to_string()))?;
        *content = Some(text.into());
        Ok(())
    }
}

impl Default for InMemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(message: String) -> RecipeStoreError {
    RecipeStoreError::Io {
        path: LOCATION.to_string(),
        source: std::io::Error::other(message),
    }
}

impl RecipeStore for InMemoryRecipeStore {
    fn read(&self) -> Result<Vec<Recipe>, RecipeStoreError> {
        let content = self.content()?.ok_or_else(|| RecipeStoreError::Io {
            path: LOCATION.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no recipes stored"),
        })?;

        parse_recipes(&content).map_err(|source| RecipeStoreError::Format {
            path: LOCATION.to_string(),
            source,
        })
    }

    fn write(&self, recipes: &[Recipe]) -> Result<(), RecipeStoreError> {
        let text = serialize_recipes(recipes).map_err(|source| RecipeStoreError::Format {
            path: LOCATION.to_string(),
            source,
        })?;
        self.set_content(text)
    }

    fn location(&self) -> String {
        LOCATION.to_string()
    }
}
