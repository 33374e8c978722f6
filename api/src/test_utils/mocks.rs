//! Mock implementations of port traits
//!
//! In-memory repository implementations that can be pre-populated for
//! testing. They keep records in insertion order, like the JSON store.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{
    Ingredient, IngredientId, NewIngredient, NewOrder, NewRecipe, Order, OrderId, OrderStatus,
    Recipe, RecipeId,
};
use crate::domain::ports::{IngredientRepository, OrderRepository, RecipeRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Ingredient Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryIngredientRepository {
    records: Arc<RwLock<Vec<Ingredient>>>,
}

impl InMemoryIngredientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an ingredient for testing
    pub fn with_ingredient(self, ingredient: Ingredient) -> Self {
        self.records.write().unwrap().push(ingredient);
        self
    }
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientRepository {
    async fn list(&self) -> Result<Vec<Ingredient>, DomainError> {
        Ok(self.records.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: &IngredientId) -> Result<Option<Ingredient>, DomainError> {
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .find(|i| i.id == *id)
            .cloned())
    }

    async fn create(&self, new: &NewIngredient) -> Result<Ingredient, DomainError> {
        let ingredient = Ingredient {
            id: IngredientId::new(),
            name: new.name.clone(),
            price: new.price,
            quantity: new.quantity,
            unit: new.unit,
        };
        self.records.write().unwrap().push(ingredient.clone());
        Ok(ingredient)
    }

    async fn remove(&self, id: &IngredientId) -> Result<bool, DomainError> {
        let mut records = self.records.write().unwrap();
        let before = records.len();
        records.retain(|i| i.id != *id);
        Ok(records.len() != before)
    }
}

// ============================================================================
// In-Memory Recipe Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryRecipeRepository {
    records: Arc<RwLock<Vec<Recipe>>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a recipe for testing
    pub fn with_recipe(self, recipe: Recipe) -> Self {
        self.records.write().unwrap().push(recipe);
        self
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>, DomainError> {
        Ok(self.records.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, DomainError> {
        Ok(self
            .records
            .read()
            .unwrap()
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
        self.records.write().unwrap().push(recipe.clone());
        Ok(recipe)
    }

    async fn remove(&self, id: &RecipeId) -> Result<bool, DomainError> {
        let mut records = self.records.write().unwrap();
        let before = records.len();
        records.retain(|r| r.id != *id);
        Ok(records.len() != before)
    }
}

// ============================================================================
// In-Memory Order Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryOrderRepository {
    records: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an order for testing
    pub fn with_order(self, order: Order) -> Self {
        self.records.write().unwrap().push(order);
        self
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.records.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .find(|o| o.id == *id)
            .cloned())
    }

    async fn create(&self, new: &NewOrder) -> Result<Order, DomainError> {
        let order = Order {
            id: OrderId::new(),
            customer: new.customer.clone(),
            date: new.date,
            status: OrderStatus::InProgress,
            products: new.products.clone(),
        };
        self.records.write().unwrap().push(order.clone());
        Ok(order)
    }

    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<bool, DomainError> {
        let mut records = self.records.write().unwrap();
        match records.iter_mut().find(|o| o.id == *id) {
            Some(order) => {
                order.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: &OrderId) -> Result<bool, DomainError> {
        let mut records = self.records.write().unwrap();
        let before = records.len();
        records.retain(|o| o.id != *id);
        Ok(records.len() != before)
    }
}
