//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundaries between the domain and external systems.
//! Adapters implement these traits to connect to real infrastructure.

use thiserror::Error;

use crate::format::FormatError;
use crate::model::Recipe;

/// Error type for recipe store operations
#[derive(Debug, Error)]
pub enum RecipeStoreError {
    #[error("Invalid recipe file path '{path}': {message}")]
    InvalidPath { path: String, message: String },
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Format error in {path}: {source}")]
    Format {
        path: String,
        #[source]
        source: FormatError,
    },
}

impl RecipeStoreError {
    /// True when the backing file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RecipeStoreError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// The grammar violation, if this is a format error
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            RecipeStoreError::Format { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Port for reading and writing the whole recipe collection
pub trait RecipeStore: Send + Sync {
    /// Read every recipe, in stored order
    fn read(&self) -> Result<Vec<Recipe>, RecipeStoreError>;

    /// Replace the stored collection with `recipes`
    fn write(&self, recipes: &[Recipe]) -> Result<(), RecipeStoreError>;

    /// Human-readable location for logs and messages
    fn location(&self) -> String;
}
