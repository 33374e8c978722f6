//! JSON store adapter for OrderRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::adapters::store::JsonStore;
use crate::domain::entities::{NewOrder, Order, OrderId, OrderStatus};
use crate::domain::ports::OrderRepository;
use crate::error::DomainError;

const COLLECTION: &str = "Orders";

/// JSON-file implementation of OrderRepository
pub struct JsonOrderRepository {
    store: JsonStore,
    records: RwLock<Vec<Order>>,
}

impl JsonOrderRepository {
    /// Load the order collection from the store
    pub async fn load(store: JsonStore) -> Self {
        let records = store.load(COLLECTION).await;
        Self {
            store,
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl OrderRepository for JsonOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        Ok(self
            .records
            .read()
            .await
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

        let mut records = self.records.write().await;
        records.push(order.clone());
        self.store.save(COLLECTION, &records).await?;

        Ok(order)
    }

    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        let Some(order) = records.iter_mut().find(|o| o.id == *id) else {
            return Ok(false);
        };
        order.status = status;
        self.store.save(COLLECTION, &records).await?;

        Ok(true)
    }

    async fn remove(&self, id: &OrderId) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|o| o.id != *id);
        if records.len() == before {
            return Ok(false);
        }
        self.store.save(COLLECTION, &records).await?;

        Ok(true)
    }
}
