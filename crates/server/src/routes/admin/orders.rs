//! Admin order dashboard handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use soycart_core::{OrderId, OrderStatus};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::orders::OrderView;
use crate::services::orders::OrderService;
use crate::state::AppState;

/// Status change request body.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: OrderStatus,
}

/// Every order across all users, newest first.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<OrderView>>> {
    let orders = OrderService::new(state.pool(), state.config().delivery_fee)
        .list_all()
        .await?;

    Ok(Json(orders.iter().map(OrderView::from).collect()))
}

/// Flip an order between pending and delivered.
///
/// Returns the updated order as the shopper would also see it; both
/// listings read the same row.
#[instrument(skip(state, admin))]
pub async fn set_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<OrderId>,
    Json(body): Json<SetStatusRequest>,
) -> Result<Json<OrderView>> {
    let orders = OrderService::new(state.pool(), state.config().delivery_fee);

    orders.set_status(id, body.status).await?;

    tracing::info!(order_id = %id, status = %body.status, admin = %admin.username, "order status changed");

    let order = orders
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(Json(OrderView::from(&order)))
}
