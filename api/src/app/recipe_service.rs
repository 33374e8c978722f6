//! Recipe service
//!
//! Orchestrates recipe pricing and persistence. A saved recipe stores the
//! ingredient cost and suggested price computed at save time; later
//! ingredient changes do not rewrite the snapshot.

use std::sync::Arc;

use serde::Serialize;

use crate::app::costing::{self, SkippedLine};
use crate::domain::entities::{NewRecipe, Recipe, RecipeId, RecipeLine};
use crate::domain::ports::{IngredientRepository, RecipeRepository};
use crate::error::{AppError, DomainError};

/// Full pricing calculation for a set of recipe lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub ingredient_cost: f64,
    pub labor_cost: f64,
    pub margin_percent: f64,
    pub total_cost: f64,
    pub suggested_price: f64,
    pub profit: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yield_units: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    /// Lines that contributed nothing to the cost, with the reason
    pub skipped: Vec<SkippedLine>,
}

/// User-supplied recipe definition, before pricing
#[derive(Debug, Clone)]
pub struct RecipeDraft {
    pub name: String,
    pub lines: Vec<RecipeLine>,
    pub labor_cost: f64,
    pub margin_percent: f64,
    pub yield_units: Option<f64>,
}

/// Service for pricing and managing recipes
pub struct RecipeService<RR, IR>
where
    RR: RecipeRepository,
    IR: IngredientRepository,
{
    recipes: Arc<RR>,
    ingredients: Arc<IR>,
}

impl<RR, IR> RecipeService<RR, IR>
where
    RR: RecipeRepository,
    IR: IngredientRepository,
{
    pub fn new(recipes: Arc<RR>, ingredients: Arc<IR>) -> Self {
        Self {
            recipes,
            ingredients,
        }
    }

    /// List saved recipes, newest first
    pub async fn list(&self) -> Result<Vec<Recipe>, AppError> {
        let mut recipes = self.recipes.list().await?;
        recipes.reverse();
        Ok(recipes)
    }

    /// Price a set of lines against the current ingredient collection
    /// without saving anything.
    pub async fn calculate(
        &self,
        lines: &[RecipeLine],
        labor_cost: f64,
        margin_percent: f64,
        yield_units: Option<f64>,
    ) -> Result<Calculation, AppError> {
        let ingredients = self.ingredients.list().await?;
        let breakdown = costing::cost_lines(lines, &ingredients);
        let quote = costing::quote(
            breakdown.ingredient_cost,
            labor_cost,
            margin_percent,
            yield_units,
        );

        Ok(Calculation {
            ingredient_cost: breakdown.ingredient_cost,
            labor_cost,
            margin_percent,
            total_cost: quote.total_cost,
            suggested_price: quote.suggested_price,
            profit: quote.profit,
            yield_units,
            price_per_unit: quote.price_per_unit,
            skipped: breakdown.skipped,
        })
    }

    /// Validate and persist a recipe together with its pricing snapshot
    pub async fn save(&self, draft: RecipeDraft) -> Result<Recipe, AppError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("Recipe name is required".to_string()).into());
        }
        if draft.lines.is_empty() {
            return Err(DomainError::Validation(
                "At least one ingredient line is required".to_string(),
            )
            .into());
        }

        let calc = self
            .calculate(
                &draft.lines,
                draft.labor_cost,
                draft.margin_percent,
                draft.yield_units,
            )
            .await?;

        let recipe = self
            .recipes
            .create(&NewRecipe {
                name: name.to_string(),
                lines: draft.lines,
                labor_cost: draft.labor_cost,
                margin_percent: draft.margin_percent,
                yield_units: draft.yield_units,
                ingredient_cost: calc.ingredient_cost,
                suggested_price: calc.suggested_price,
            })
            .await?;

        Ok(recipe)
    }

    /// Remove a recipe. Missing ids are a no-op.
    pub async fn remove(&self, id: &RecipeId) -> Result<(), AppError> {
        let removed = self.recipes.remove(id).await?;
        if !removed {
            tracing::debug!(%id, "remove recipe: id not found, ignoring");
        }
        Ok(())
    }
}
