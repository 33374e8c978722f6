//! Ingredient handlers
//!
//! Endpoints for registering, listing, and removing ingredients.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Ingredient, IngredientId, NewIngredient, Unit};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating an ingredient
#[derive(Debug, Deserialize)]
pub struct CreateIngredientRequest {
    pub name: String,
    /// Price paid for `quantity` of `unit`
    pub price: f64,
    pub quantity: f64,
    pub unit: Unit,
}

/// Ingredient response with the derived per-base-unit price
#[derive(Debug, Serialize)]
pub struct IngredientResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub unit: Unit,
    /// Price per base unit (gram, milliliter, or count)
    pub unit_price: f64,
    pub base_unit: Unit,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id.to_string(),
            unit_price: ingredient.unit_price(),
            base_unit: ingredient.unit.base(),
            name: ingredient.name,
            price: ingredient.price,
            quantity: ingredient.quantity,
            unit: ingredient.unit,
        }
    }
}

/// GET /ingredients
///
/// List all ingredients in insertion order.
pub async fn list_ingredients(
    State(state): State<AppState>,
) -> Result<Json<Vec<IngredientResponse>>, AppError> {
    let ingredients = state.ingredient_service.list().await?;
    Ok(Json(ingredients.into_iter().map(Into::into).collect()))
}

/// POST /ingredients
///
/// Register a new ingredient.
pub async fn create_ingredient(
    State(state): State<AppState>,
    Json(request): Json<CreateIngredientRequest>,
) -> Result<Json<IngredientResponse>, AppError> {
    let ingredient = state
        .ingredient_service
        .add(NewIngredient {
            name: request.name,
            price: request.price,
            quantity: request.quantity,
            unit: request.unit,
        })
        .await?;

    Ok(Json(ingredient.into()))
}

/// DELETE /ingredients/:id
///
/// Remove an ingredient. Unknown ids are ignored; recipes referencing the
/// ingredient keep their lines.
pub async fn delete_ingredient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(), AppError> {
    state.ingredient_service.remove(&IngredientId(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_create_request_valid() {
        let json = r#"{"name": "Sugar", "price": 10.0, "quantity": 1, "unit": "kg"}"#;
        let request: CreateIngredientRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Sugar");
        assert_eq!(request.unit, Unit::Kilogram);
    }

    #[test]
    fn parse_create_request_unknown_unit_falls_back_to_count() {
        let json = r#"{"name": "Sugar", "price": 10.0, "quantity": 1, "unit": "oz"}"#;
        let request: CreateIngredientRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.unit, Unit::Count);
    }

    #[test]
    fn parse_create_request_missing_field() {
        let json = r#"{"name": "Sugar", "price": 10.0}"#;
        let result: Result<CreateIngredientRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_response_reports_unit_price() {
        let response: IngredientResponse = Ingredient {
            id: IngredientId::new(),
            name: "Sugar".to_string(),
            price: 10.0,
            quantity: 1.0,
            unit: Unit::Kilogram,
        }
        .into();

        assert_eq!(response.unit_price, 0.01);
        assert_eq!(response.base_unit, Unit::Gram);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["unit"], "kg");
        assert_eq!(json["base_unit"], "g");
        assert_eq!(json["unit_price"], 0.01);
    }
}
