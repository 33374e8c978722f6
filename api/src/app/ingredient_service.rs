//! Ingredient service
//!
//! Handles ingredient registration, listing, and removal.

use std::sync::Arc;

use crate::domain::entities::{Ingredient, IngredientId, NewIngredient};
use crate::domain::ports::IngredientRepository;
use crate::error::{AppError, DomainError};

/// Service for managing ingredients
pub struct IngredientService<IR>
where
    IR: IngredientRepository,
{
    ingredients: Arc<IR>,
}

impl<IR> IngredientService<IR>
where
    IR: IngredientRepository,
{
    pub fn new(ingredients: Arc<IR>) -> Self {
        Self { ingredients }
    }

    /// List all ingredients in insertion order
    pub async fn list(&self) -> Result<Vec<Ingredient>, AppError> {
        Ok(self.ingredients.list().await?)
    }

    /// Register a new ingredient
    pub async fn add(&self, new: NewIngredient) -> Result<Ingredient, AppError> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("Name is required".to_string()).into());
        }
        if new.price <= 0.0 {
            return Err(
                DomainError::Validation("Price must be greater than zero".to_string()).into(),
            );
        }
        if new.quantity <= 0.0 {
            return Err(
                DomainError::Validation("Quantity must be greater than zero".to_string()).into(),
            );
        }

        let ingredient = self
            .ingredients
            .create(&NewIngredient {
                name: name.to_string(),
                ..new
            })
            .await?;

        Ok(ingredient)
    }

    /// Remove an ingredient.
    ///
    /// Missing ids are a no-op. Recipes referencing the removed ingredient
    /// keep their lines; costing resolves and skips them at compute time.
    pub async fn remove(&self, id: &IngredientId) -> Result<(), AppError> {
        let removed = self.ingredients.remove(id).await?;
        if !removed {
            tracing::debug!(%id, "remove ingredient: id not found, ignoring");
        }
        Ok(())
    }
}
