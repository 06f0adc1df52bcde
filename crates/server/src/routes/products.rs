//! Product route handlers.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use soycart_core::{Money, ProductId};

use crate::error::Result;
use crate::models::Product;
use crate::services::catalog::CatalogService;
use crate::state::AppState;

/// Product display data for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub emoji: String,
    /// Unit price in centavos.
    pub price: Money,
    /// Human-readable peso price (e.g. "₱25.00").
    pub price_display: String,
    pub available: bool,
    pub stock: i64,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            emoji: product.emoji.clone(),
            price: product.price,
            price_display: product.price.to_string(),
            available: product.available,
            stock: product.stock,
        }
    }
}

/// List the catalog, unavailable products included (rendered sold out).
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<ProductView>>> {
    let products = CatalogService::new(state.pool()).list().await?;

    Ok(Json(products.iter().map(ProductView::from).collect()))
}
