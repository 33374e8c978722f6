//! Ingredient domain entity
//!
//! An ingredient is a purchased good: a price paid for a quantity in some
//! unit. The unit price derived from it drives all recipe costing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::unit::Unit;

/// Unique identifier for an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientId(pub Uuid);

impl IngredientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IngredientId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for IngredientId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchased ingredient
///
/// Immutable once created; there is no edit operation, only removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    /// Price paid for `quantity` of `unit`
    pub price: f64,
    /// Purchased quantity, validated > 0 at creation
    pub quantity: f64,
    pub unit: Unit,
}

impl Ingredient {
    /// Price per base unit (per gram, per milliliter or per count).
    ///
    /// Division by the normalized quantity: the creation path guarantees
    /// quantity > 0, but a record bypassing it yields a non-finite value
    /// that must be treated as invalid for display.
    pub fn unit_price(&self) -> f64 {
        self.price / self.unit.to_base(self.quantity)
    }
}

/// Data needed to create a new ingredient
#[derive(Debug, Clone)]
pub struct NewIngredient {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub unit: Unit,
}
