//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod store;

pub use store::{JsonIngredientRepository, JsonOrderRepository, JsonRecipeRepository, JsonStore};
