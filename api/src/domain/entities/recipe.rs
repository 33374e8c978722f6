//! Recipe domain entity
//!
//! A recipe is an ordered list of ingredient lines plus labor and margin.
//! The ingredient cost and suggested price computed at save time are stored
//! with the recipe and NOT recomputed when ingredient prices later change;
//! a saved recipe is a snapshot of its pricing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ingredient::IngredientId;
use super::unit::Unit;

/// Unique identifier for a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeId(pub Uuid);

impl RecipeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RecipeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One ingredient line of a recipe
///
/// `ingredient_id` is a non-owning lookup key. Removing the ingredient does
/// not touch the line; costing resolves the reference at compute time and
/// skips lines whose ingredient is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeLine {
    pub ingredient_id: IngredientId,
    pub quantity: f64,
    pub unit: Unit,
}

/// A saved recipe with its pricing snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub lines: Vec<RecipeLine>,
    pub labor_cost: f64,
    pub margin_percent: f64,
    /// How many sellable units the recipe produces, if tracked
    pub yield_units: Option<f64>,
    /// Ingredient cost at save time
    pub ingredient_cost: f64,
    /// Suggested sale price at save time
    pub suggested_price: f64,
}

/// Data needed to save a new recipe, including the pricing snapshot the
/// service computed for it.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub name: String,
    pub lines: Vec<RecipeLine>,
    pub labor_cost: f64,
    pub margin_percent: f64,
    pub yield_units: Option<f64>,
    pub ingredient_cost: f64,
    pub suggested_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_round_trips_through_json() {
        let recipe = Recipe {
            id: RecipeId::new(),
            name: "Brigadeiro".to_string(),
            lines: vec![RecipeLine {
                ingredient_id: IngredientId::new(),
                quantity: 200.0,
                unit: Unit::Gram,
            }],
            labor_cost: 5.0,
            margin_percent: 50.0,
            yield_units: Some(20.0),
            ingredient_cost: 8.0,
            suggested_price: 19.5,
        };

        let json = serde_json::to_string(&recipe).unwrap();
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, recipe.id);
        assert_eq!(back.lines.len(), 1);
        assert_eq!(back.lines[0].unit, Unit::Gram);
        assert_eq!(back.yield_units, Some(20.0));
        assert_eq!(back.suggested_price, 19.5);
    }

    #[test]
    fn recipe_without_yield_round_trips() {
        let recipe = Recipe {
            id: RecipeId::new(),
            name: "Bolo".to_string(),
            lines: vec![],
            labor_cost: 0.0,
            margin_percent: 0.0,
            yield_units: None,
            ingredient_cost: 0.0,
            suggested_price: 0.0,
        };

        let json = serde_json::to_string(&recipe).unwrap();
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back.yield_units, None);
    }

    #[test]
    fn recipe_id_display() {
        let id = RecipeId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
