//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod ingredient;
pub mod order;
pub mod recipe;
pub mod unit;

pub use ingredient::{Ingredient, IngredientId, NewIngredient};
pub use order::{NewOrder, Order, OrderId, OrderStatus};
pub use recipe::{NewRecipe, Recipe, RecipeId, RecipeLine};
pub use unit::{Measure, Unit, UnitGroup};
