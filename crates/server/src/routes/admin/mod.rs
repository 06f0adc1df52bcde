//! Admin route handlers.
//!
//! Every handler here requires the reserved admin identity via the
//! [`RequireAdmin`](crate::middleware::RequireAdmin) extractor:
//! anonymous requests get 401, logged-in shoppers get 403.

pub mod announcements;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

/// Create the admin routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(orders::index))
        .route("/orders/{id}/status", post(orders::set_status))
        .route(
            "/products/{id}/availability",
            post(products::set_availability),
        )
        .route(
            "/announcements",
            get(announcements::index).post(announcements::create),
        )
        .route(
            "/announcements/{id}",
            patch(announcements::update).delete(announcements::remove),
        )
}
