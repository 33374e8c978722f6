//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod convert;
pub mod ingredients;
pub mod login;
pub mod orders;
pub mod recipes;

pub use convert::{convert_basic, convert_culinary};
pub use ingredients::{create_ingredient, delete_ingredient, list_ingredients};
pub use login::login;
pub use orders::{create_order, delete_order, list_orders, update_order_status};
pub use recipes::{calculate_recipe, create_recipe, delete_recipe, list_recipes};
