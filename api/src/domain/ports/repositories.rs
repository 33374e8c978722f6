//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the JSON file store).

use async_trait::async_trait;

use crate::domain::entities::{
    Ingredient, IngredientId, NewIngredient, NewOrder, NewRecipe, Order, OrderId, OrderStatus,
    Recipe, RecipeId,
};
use crate::error::DomainError;

/// Repository for Ingredient entities
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// List all ingredients in insertion order
    async fn list(&self) -> Result<Vec<Ingredient>, DomainError>;

    /// Find an ingredient by ID
    async fn find_by_id(&self, id: &IngredientId) -> Result<Option<Ingredient>, DomainError>;

    /// Create a new ingredient
    async fn create(&self, ingredient: &NewIngredient) -> Result<Ingredient, DomainError>;

    /// Remove an ingredient, returning whether it existed
    async fn remove(&self, id: &IngredientId) -> Result<bool, DomainError>;
}

/// Repository for Recipe entities
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// List all recipes in insertion order
    async fn list(&self) -> Result<Vec<Recipe>, DomainError>;

    /// Find a recipe by ID
    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, DomainError>;

    /// Create a new recipe
    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, DomainError>;

    /// Remove a recipe, returning whether it existed
    async fn remove(&self, id: &RecipeId) -> Result<bool, DomainError>;
}

/// Repository for Order entities
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// List all orders in insertion order
    async fn list(&self) -> Result<Vec<Order>, DomainError>;

    /// Find an order by ID
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Create a new order
    async fn create(&self, order: &NewOrder) -> Result<Order, DomainError>;

    /// Update the status of an order, returning whether it existed
    async fn update_status(&self, id: &OrderId, status: OrderStatus)
        -> Result<bool, DomainError>;

    /// Remove an order, returning whether it existed
    async fn remove(&self, id: &OrderId) -> Result<bool, DomainError>;
}
