//! Application use cases / business logic

pub mod render;
pub mod repository;

pub use render::{RenderConfig, Renderer};
pub use repository::{RecipeRepository, RepositoryError};
