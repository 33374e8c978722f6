//! Order handlers
//!
//! Endpoints for customer order intake and status tracking.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{NewOrder, Order, OrderId, OrderStatus};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating an order
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub customer: String,
    /// Date the order is due (YYYY-MM-DD)
    pub date: NaiveDate,
    pub products: Vec<String>,
}

/// Request body for updating an order's status
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// Order response
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub customer: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub products: Vec<String>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            customer: order.customer,
            date: order.date,
            status: order.status,
            products: order.products,
        }
    }
}

/// GET /orders
///
/// List orders sorted by date, earliest first.
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = state.order_service.list().await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

/// POST /orders
///
/// Register a new order. New orders start in progress.
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state
        .order_service
        .add(NewOrder {
            customer: request.customer,
            date: request.date,
            products: request.products,
        })
        .await?;

    Ok(Json(order.into()))
}

/// PATCH /orders/:id/status
///
/// Update an order's status. Unknown ids are ignored.
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<(), AppError> {
    state
        .order_service
        .update_status(&OrderId(id), request.status)
        .await
}

/// DELETE /orders/:id
///
/// Remove an order. Unknown ids are ignored.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(), AppError> {
    state.order_service.remove(&OrderId(id)).await
}
