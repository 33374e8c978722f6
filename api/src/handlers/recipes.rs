//! Recipe handlers
//!
//! Endpoints for pricing, saving, listing, and removing recipes.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::{Calculation, RecipeDraft};
use crate::domain::entities::{IngredientId, Recipe, RecipeId, RecipeLine, Unit};
use crate::error::AppError;
use crate::AppState;

/// One ingredient line of a recipe request
#[derive(Debug, Deserialize)]
pub struct LineRequest {
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: Unit,
}

impl From<LineRequest> for RecipeLine {
    fn from(line: LineRequest) -> Self {
        Self {
            ingredient_id: IngredientId(line.ingredient_id),
            quantity: line.quantity,
            unit: line.unit,
        }
    }
}

/// Request body for pricing a recipe without saving it
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub lines: Vec<LineRequest>,
    #[serde(default)]
    pub labor_cost: f64,
    #[serde(default)]
    pub margin_percent: f64,
    #[serde(default)]
    pub yield_units: Option<f64>,
}

/// Request body for saving a recipe
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub name: String,
    pub lines: Vec<LineRequest>,
    #[serde(default)]
    pub labor_cost: f64,
    #[serde(default)]
    pub margin_percent: f64,
    #[serde(default)]
    pub yield_units: Option<f64>,
}

/// One ingredient line of a recipe response
#[derive(Debug, Serialize)]
pub struct LineResponse {
    pub ingredient_id: String,
    pub quantity: f64,
    pub unit: Unit,
}

/// Recipe response with its pricing snapshot
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: String,
    pub name: String,
    pub lines: Vec<LineResponse>,
    pub labor_cost: f64,
    pub margin_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yield_units: Option<f64>,
    /// Ingredient cost at save time
    pub ingredient_cost: f64,
    /// Suggested sale price at save time
    pub suggested_price: f64,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            name: recipe.name,
            lines: recipe
                .lines
                .into_iter()
                .map(|line| LineResponse {
                    ingredient_id: line.ingredient_id.to_string(),
                    quantity: line.quantity,
                    unit: line.unit,
                })
                .collect(),
            labor_cost: recipe.labor_cost,
            margin_percent: recipe.margin_percent,
            yield_units: recipe.yield_units,
            ingredient_cost: recipe.ingredient_cost,
            suggested_price: recipe.suggested_price,
        }
    }
}

/// GET /recipes
///
/// List saved recipes, newest first.
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecipeResponse>>, AppError> {
    let recipes = state.recipe_service.list().await?;
    Ok(Json(recipes.into_iter().map(Into::into).collect()))
}

/// POST /recipes/calculate
///
/// Price a set of recipe lines against the current ingredient collection
/// without saving anything. Invalid lines are skipped and reported in the
/// `skipped` diagnostics.
pub async fn calculate_recipe(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Result<Json<Calculation>, AppError> {
    let lines: Vec<RecipeLine> = request.lines.into_iter().map(Into::into).collect();
    let calculation = state
        .recipe_service
        .calculate(
            &lines,
            request.labor_cost,
            request.margin_percent,
            request.yield_units,
        )
        .await?;

    Ok(Json(calculation))
}

/// POST /recipes
///
/// Validate and save a recipe with its computed pricing snapshot.
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> Result<Json<RecipeResponse>, AppError> {
    let recipe = state
        .recipe_service
        .save(RecipeDraft {
            name: request.name,
            lines: request.lines.into_iter().map(Into::into).collect(),
            labor_cost: request.labor_cost,
            margin_percent: request.margin_percent,
            yield_units: request.yield_units,
        })
        .await?;

    Ok(Json(recipe.into()))
}

/// DELETE /recipes/:id
///
/// Remove a recipe. Unknown ids are ignored.
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(), AppError> {
    state.recipe_service.remove(&RecipeId(id)).await
}
