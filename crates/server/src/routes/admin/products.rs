//! Admin catalog handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use soycart_core::ProductId;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::products::ProductView;
use crate::services::catalog::CatalogService;
use crate::state::AppState;

/// Availability change request body.
#[derive(Debug, Deserialize)]
pub struct SetAvailabilityRequest {
    pub available: bool,
}

/// Toggle a product's availability flag. Idempotent.
///
/// Open carts keep any stale lines; checkout re-validates them.
#[instrument(skip(state, admin))]
pub async fn set_availability(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<ProductId>,
    Json(body): Json<SetAvailabilityRequest>,
) -> Result<Json<ProductView>> {
    let catalog = CatalogService::new(state.pool());

    catalog.set_availability(id, body.available).await?;

    tracing::info!(product_id = %id, available = body.available, admin = %admin.username, "availability changed");

    let product = catalog
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(ProductView::from(&product)))
}
