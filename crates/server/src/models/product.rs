//! Product domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use soycart_core::{Money, ProductId};

/// A purchasable catalog entry.
///
/// Only the availability flag is mutable after creation; price changes
/// and deletions are out of scope for the storefront.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name (e.g. "Mango Soya").
    pub name: String,
    /// Emoji badge shown beside the name.
    pub emoji: String,
    /// Unit price in centavos.
    pub price: Money,
    /// Whether the product can currently be added to carts.
    pub available: bool,
    /// Remaining stock count (informational; no reservation).
    pub stock: i64,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a catalog entry (seeding and tests).
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub emoji: String,
    pub price: Money,
    pub available: bool,
    pub stock: i64,
}
