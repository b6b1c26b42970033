//! filed-recipes domain crate
//!
//! This crate contains the core domain logic following hexagonal architecture:
//! - `model`: Recipe and ingredient entities
//! - `format`: The section-delimited recipe text format
//! - `ports`: Trait definitions for external dependencies (adapters)
//! - `notify`: Change notification registry
//! - `usecases`: Repository and rendering logic

pub mod format;
pub mod model;
pub mod notify;
pub mod ports;
pub mod usecases;

pub use format::{FormatError, parse_recipes, serialize_recipes};
pub use model::*;
pub use notify::{ChangeNotifier, SubscriptionId};
pub use ports::*;
