//! JSON store adapter for RecipeRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::adapters::store::JsonStore;
use crate::domain::entities::{NewRecipe, Recipe, RecipeId};
use crate::domain::ports::RecipeRepository;
use crate::error::DomainError;

const COLLECTION: &str = "Recipes";

/// JSON-file implementation of RecipeRepository
pub struct JsonRecipeRepository {
    store: JsonStore,
    records: RwLock<Vec<Recipe>>,
}

impl JsonRecipeRepository {
    /// Load the recipe collection from the store
    pub async fn load(store: JsonStore) -> Self {
        let records = store.load(COLLECTION).await;
        Self {
            store,
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl RecipeRepository for JsonRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>, DomainError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.id == *id)
            .cloned())
    }

    async fn create(&self, new: &NewRecipe) -> Result<Recipe, DomainError> {
        let recipe = Recipe {
            id: RecipeId::new(),
            name: new.name.clone(),
            lines: new.lines.clone(),
            labor_cost: new.labor_cost,
            margin_percent: new.margin_percent,
            yield_units: new.yield_units,
            ingredient_cost: new.ingredient_cost,
            suggested_price: new.suggested_price,
        };

        let mut records = self.records.write().await;
        records.push(recipe.clone());
        self.store.save(COLLECTION, &records).await?;

        Ok(recipe)
    }

    async fn remove(&self, id: &RecipeId) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != *id);
        if records.len() == before {
            return Ok(false);
        }
        self.store.save(COLLECTION, &records).await?;

        Ok(true)
    }
}
