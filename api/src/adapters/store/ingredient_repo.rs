//! JSON store adapter for IngredientRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::adapters::store::JsonStore;
use crate::domain::entities::{Ingredient, IngredientId, NewIngredient};
use crate::domain::ports::IngredientRepository;
use crate::error::DomainError;

const COLLECTION: &str = "Ingredients";

/// JSON-file implementation of IngredientRepository
///
/// Holds the collection in memory behind an RwLock and rewrites the
/// collection file after every mutation.
pub struct JsonIngredientRepository {
    store: JsonStore,
    records: RwLock<Vec<Ingredient>>,
}

impl JsonIngredientRepository {
    /// Load the ingredient collection from the store
    pub async fn load(store: JsonStore) -> Self {
        let records = store.load(COLLECTION).await;
        Self {
            store,
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl IngredientRepository for JsonIngredientRepository {
    async fn list(&self) -> Result<Vec<Ingredient>, DomainError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &IngredientId) -> Result<Option<Ingredient>, DomainError> {
        Ok(self
            .records
            .read()
            .await
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

        let mut records = self.records.write().await;
        records.push(ingredient.clone());
        self.store.save(COLLECTION, &records).await?;

        Ok(ingredient)
    }

    async fn remove(&self, id: &IngredientId) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|i| i.id != *id);
        if records.len() == before {
            return Ok(false);
        }
        self.store.save(COLLECTION, &records).await?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Unit;

    fn new_ingredient(name: &str) -> NewIngredient {
        NewIngredient {
            name: name.to_string(),
            price: 10.0,
            quantity: 1.0,
            unit: Unit::Kilogram,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonIngredientRepository::load(JsonStore::new(dir.path())).await;

        let created = repo.create(&new_ingredient("Sugar")).await.unwrap();

        assert_eq!(created.name, "Sugar");
        assert!(dir.path().join("Ingredients.json").exists());
        assert_eq!(repo.find_by_id(&created.id).await.unwrap().unwrap().id, created.id);
    }

    #[tokio::test]
    async fn collection_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let created = {
            let repo = JsonIngredientRepository::load(JsonStore::new(dir.path())).await;
            repo.create(&new_ingredient("Sugar")).await.unwrap()
        };

        let reloaded = JsonIngredientRepository::load(JsonStore::new(dir.path())).await;
        let listed = reloaded.list().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].unit, Unit::Kilogram);
    }

    #[tokio::test]
    async fn remove_persists_deletion() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonIngredientRepository::load(JsonStore::new(dir.path())).await;
        let created = repo.create(&new_ingredient("Sugar")).await.unwrap();

        assert!(repo.remove(&created.id).await.unwrap());

        let reloaded = JsonIngredientRepository::load(JsonStore::new(dir.path())).await;
        assert!(reloaded.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_missing_id_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonIngredientRepository::load(JsonStore::new(dir.path())).await;

        assert!(!repo.remove(&IngredientId::new()).await.unwrap());
    }
}
