//! Order domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use soycart_core::{
    ContactNumber, DeliveryOption, Money, OrderId, OrderItemId, OrderStatus, ProductId, UserId,
};

/// A persisted checkout.
///
/// Everything except `status` is immutable once created. The campus and
/// contact fields are snapshots of the account at checkout time so the
/// admin can coordinate delivery even if the account changes later.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Account that placed the order.
    pub user_id: UserId,
    /// Pickup or delivery.
    pub delivery_option: DeliveryOption,
    /// Per-item fee applied at checkout (zero for pickup).
    pub delivery_fee: Money,
    /// Computed total: Σ quantity × (unit price + delivery fee).
    pub total: Money,
    /// Pending until the admin marks it delivered.
    pub status: OrderStatus,
    /// Campus snapshot for delivery coordination.
    pub campus: String,
    /// Contact snapshot for delivery coordination.
    pub contact: ContactNumber,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// Line items, loaded alongside the order row.
    #[sqlx(skip)]
    pub items: Vec<OrderItem>,
}

/// One line of an order.
///
/// Name and unit price are snapshots taken from the cart at checkout, so
/// history stays accurate across catalog edits.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderItem {
    /// Unique line ID.
    pub id: OrderItemId,
    /// Order this line belongs to.
    pub order_id: OrderId,
    /// Product that was ordered.
    pub product_id: ProductId,
    /// Product name at checkout time.
    pub product_name: String,
    /// Base unit price at checkout time (delivery fee not included).
    pub unit_price: Money,
    /// Quantity ordered, always ≥ 1.
    pub quantity: u32,
}

/// Fields required to persist an order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub delivery_option: DeliveryOption,
    pub delivery_fee: Money,
    pub total: Money,
    pub campus: String,
    pub contact: ContactNumber,
    pub items: Vec<NewOrderItem>,
}

/// One line of a not-yet-persisted order.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: u32,
}
