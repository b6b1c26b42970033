//! filed-recipes adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `store`: Filesystem and in-memory recipe stores

mod recipes_fs;
mod store_memory;

/// Re-exports for recipe store adapters
pub mod store {
    pub use crate::recipes_fs::FsRecipeStore as FilesystemRecipeStore;
    pub use crate::store_memory::InMemoryRecipeStore;
}
