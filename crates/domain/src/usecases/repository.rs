//! Recipe repository use case - owns the sorted in-memory recipe collection

use std::sync::Arc;
use thiserror::Error;

use crate::{
    model::Recipe,
    notify::{ChangeNotifier, SubscriptionId},
    ports::{RecipeStore, RecipeStoreError},
};

/// Repository errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Store(#[from] RecipeStoreError),
    #[error("Recipe index {index} is out of range (collection has {len} recipes)")]
    OutOfRange { index: usize, len: usize },
}

/// In-memory recipe collection backed by a [`RecipeStore`]
///
/// After a successful [`load`](Self::load) the collection is sorted by name.
/// Deleting does not re-sort. Reads hand out clones; nothing returned by this
/// type refers to the stored recipes.
pub struct RecipeRepository<S>
where
    S: RecipeStore + ?Sized,
{
    store: Arc<S>,
    recipes: Vec<Recipe>,
    modified: bool,
    notifier: ChangeNotifier,
}

impl<S> RecipeRepository<S>
where
    S: RecipeStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            recipes: Vec::new(),
            modified: false,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Replace the collection with the store's content, sorted by name
    ///
    /// On failure the current collection and modified flag are left as they were.
    pub fn load(&mut self) -> Result<(), RepositoryError> {
        let mut recipes = self.store.read()?;
        recipes.sort_by(|a, b| a.name().cmp(b.name()));

        tracing::info!(
            location = %self.store.location(),
            count = recipes.len(),
            "Loaded recipes"
        );

        self.recipes = recipes;
        self.modified = false;
        self.notifier.notify();
        Ok(())
    }

    /// Write the collection, in its current order, to the store
    pub fn save(&mut self) -> Result<(), RepositoryError> {
        self.store.write(&self.recipes)?;

        tracing::info!(
            location = %self.store.location(),
            count = self.recipes.len(),
            "Saved recipes"
        );

        self.modified = false;
        self.notifier.notify();
        Ok(())
    }

    /// Copies of all recipes, in collection order
    pub fn get_all(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    /// Copy of the recipe at `index`
    pub fn get_at(&self, index: usize) -> Result<Recipe, RepositoryError> {
        self.recipes
            .get(index)
            .cloned()
            .ok_or(RepositoryError::OutOfRange {
                index,
                len: self.recipes.len(),
            })
    }

    /// Delete the stored recipe matching `recipe`
    ///
    /// An identical stored recipe is preferred; otherwise the first recipe
    /// with the same name is removed. Returns `None` and changes nothing when
    /// no recipe matches.
    pub fn delete(&mut self, recipe: &Recipe) -> Option<Recipe> {
        let position = self
            .recipes
            .iter()
            .position(|stored| stored == recipe)
            .or_else(|| {
                self.recipes
                    .iter()
                    .position(|stored| stored.name() == recipe.name())
            });

        match position {
            Some(index) => Some(self.remove(index)),
            None => {
                tracing::debug!(name = %recipe.name(), "Recipe to delete not found");
                None
            }
        }
    }

    /// Delete the recipe at `index`
    pub fn delete_at(&mut self, index: usize) -> Result<Recipe, RepositoryError> {
        if index >= self.recipes.len() {
            return Err(RepositoryError::OutOfRange {
                index,
                len: self.recipes.len(),
            });
        }
        Ok(self.remove(index))
    }

    fn remove(&mut self, index: usize) -> Recipe {
        let removed = self.recipes.remove(index);
        tracing::info!(name = %removed.name(), index, "Deleted recipe");

        self.modified = true;
        self.notifier.notify();
        removed
    }

    /// True when the collection has changed since the last load or save
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Register a callback fired after every load, save and delete
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Location of the backing store
    pub fn location(&self) -> String {
        self.store.location()
    }
}
