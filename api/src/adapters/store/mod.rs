//! JSON file store adapters
//!
//! Repository implementations backed by the JSON key-value store.

pub mod ingredient_repo;
pub mod json_store;
pub mod order_repo;
pub mod recipe_repo;

pub use ingredient_repo::JsonIngredientRepository;
pub use json_store::JsonStore;
pub use order_repo::JsonOrderRepository;
pub use recipe_repo::JsonRecipeRepository;
