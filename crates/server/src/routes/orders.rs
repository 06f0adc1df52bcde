//! Order history route handlers.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use soycart_core::{ContactNumber, DeliveryOption, Money, OrderId, OrderItemId, OrderStatus, ProductId, UserId};

use crate::error::Result;
use crate::middleware::RequireUser;
use crate::models::order::{Order, OrderItem};
use crate::services::orders::OrderService;
use crate::state::AppState;

/// Order line display data for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemView {
    pub id: OrderItemId,
    pub product_id: ProductId,
    pub product_name: String,
    /// Base unit price in centavos (delivery fee not included).
    pub unit_price: Money,
    pub unit_price_display: String,
    pub quantity: u32,
}

impl From<&OrderItem> for OrderItemView {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            product_name: item.product_name.clone(),
            unit_price: item.unit_price,
            unit_price_display: item.unit_price.to_string(),
            quantity: item.quantity,
        }
    }
}

/// Order display data for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub user_id: UserId,
    pub delivery_option: DeliveryOption,
    /// Per-item delivery fee in centavos (zero for pickup).
    pub delivery_fee: Money,
    /// Order total in centavos.
    pub total: Money,
    pub total_display: String,
    pub status: OrderStatus,
    pub campus: String,
    pub contact: ContactNumber,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemView>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            delivery_option: order.delivery_option,
            delivery_fee: order.delivery_fee,
            total: order.total,
            total_display: order.total.to_string(),
            status: order.status,
            campus: order.campus.clone(),
            contact: order.contact.clone(),
            created_at: order.created_at,
            items: order.items.iter().map(OrderItemView::from).collect(),
        }
    }
}

/// The logged-in shopper's order history, newest first.
#[instrument(skip(state, user))]
pub async fn index(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<OrderView>>> {
    let orders = OrderService::new(state.pool(), state.config().delivery_fee)
        .list_for_user(user.id)
        .await?;

    Ok(Json(orders.iter().map(OrderView::from).collect()))
}
