//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::NaiveDate;

use crate::domain::entities::{
    Ingredient, IngredientId, Order, OrderId, OrderStatus, Recipe, RecipeId, RecipeLine, Unit,
};

/// Create a test ingredient priced at 10.00 per kilogram
pub fn test_ingredient() -> Ingredient {
    Ingredient {
        id: IngredientId::new(),
        name: "Sugar".to_string(),
        price: 10.0,
        quantity: 1.0,
        unit: Unit::Kilogram,
    }
}

/// Create a test ingredient with the given pricing
pub fn ingredient_with(name: &str, price: f64, quantity: f64, unit: Unit) -> Ingredient {
    Ingredient {
        id: IngredientId::new(),
        name: name.to_string(),
        price,
        quantity,
        unit,
    }
}

/// Create a test recipe with one line referencing the given ingredient
pub fn test_recipe(ingredient: &Ingredient) -> Recipe {
    Recipe {
        id: RecipeId::new(),
        name: "Brigadeiro".to_string(),
        lines: vec![RecipeLine {
            ingredient_id: ingredient.id,
            quantity: 200.0,
            unit: Unit::Gram,
        }],
        labor_cost: 1.0,
        margin_percent: 50.0,
        yield_units: Some(20.0),
        ingredient_cost: 2.0,
        suggested_price: 4.5,
    }
}

/// Create a test order with default values
pub fn test_order() -> Order {
    Order {
        id: OrderId::new(),
        customer: "Maria".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
        status: OrderStatus::InProgress,
        products: vec!["Carrot cake".to_string()],
    }
}
