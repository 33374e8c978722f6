//! Order service
//!
//! Handles customer order intake and status tracking.

use std::sync::Arc;

use crate::domain::entities::{NewOrder, Order, OrderId, OrderStatus};
use crate::domain::ports::OrderRepository;
use crate::error::{AppError, DomainError};

/// Service for managing customer orders
pub struct OrderService<OR>
where
    OR: OrderRepository,
{
    orders: Arc<OR>,
}

impl<OR> OrderService<OR>
where
    OR: OrderRepository,
{
    pub fn new(orders: Arc<OR>) -> Self {
        Self { orders }
    }

    /// List orders sorted by date, earliest first. Orders on the same date
    /// keep their insertion order.
    pub async fn list(&self) -> Result<Vec<Order>, AppError> {
        let mut orders = self.orders.list().await?;
        orders.sort_by_key(|o| o.date);
        Ok(orders)
    }

    /// Register a new order. Blank product entries are dropped; new orders
    /// start in progress.
    pub async fn add(&self, new: NewOrder) -> Result<Order, AppError> {
        let customer = new.customer.trim();
        if customer.is_empty() {
            return Err(DomainError::Validation("Customer name is required".to_string()).into());
        }

        let products: Vec<String> = new
            .products
            .iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        if products.is_empty() {
            return Err(
                DomainError::Validation("At least one product is required".to_string()).into(),
            );
        }

        let order = self
            .orders
            .create(&NewOrder {
                customer: customer.to_string(),
                date: new.date,
                products,
            })
            .await?;

        Ok(order)
    }

    /// Update an order's status. Missing ids are a silent no-op.
    pub async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), AppError> {
        let updated = self.orders.update_status(id, status).await?;
        if !updated {
            tracing::debug!(%id, "update order status: id not found, ignoring");
        }
        Ok(())
    }

    /// Remove an order. Missing ids are a no-op.
    pub async fn remove(&self, id: &OrderId) -> Result<(), AppError> {
        let removed = self.orders.remove(id).await?;
        if !removed {
            tracing::debug!(%id, "remove order: id not found, ignoring");
        }
        Ok(())
    }
}
