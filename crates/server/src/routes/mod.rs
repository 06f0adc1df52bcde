//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness probe
//! GET  /health/ready           - Readiness probe (DB ping)
//!
//! # Auth
//! POST /auth/register          - Create an account (logs in)
//! POST /auth/login             - Login
//! POST /auth/logout            - Logout (discards the cart)
//! GET  /auth/me                - Current identity
//!
//! # Shop
//! GET  /products               - Catalog with availability flags
//! GET  /announcements          - Active announcements, newest first
//! GET  /cart                   - Current session cart
//! POST /cart/add               - Add one unit of a product
//! POST /cart/update            - Set a line's quantity (min 1)
//! POST /cart/remove            - Remove a line
//! POST /cart/checkout          - Turn the cart into an order
//! GET  /orders                 - Own order history, newest first
//!
//! # Admin (reserved username only)
//! GET    /admin/orders                  - Every order, newest first
//! POST   /admin/orders/{id}/status      - Flip pending ⇄ delivered
//! POST   /admin/products/{id}/availability - Toggle availability
//! GET    /admin/announcements           - Every announcement
//! POST   /admin/announcements           - Create (active by default)
//! PATCH  /admin/announcements/{id}      - Partial edit
//! DELETE /admin/announcements/{id}      - Delete
//! ```

pub mod admin;
pub mod announcements;
pub mod auth;
pub mod cart;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/checkout", post(cart::checkout))
}

/// Create the full application router (minus health probes and layers).
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .route("/products", get(products::index))
        .route("/announcements", get(announcements::index))
        .nest("/cart", cart_routes())
        .route("/orders", get(orders::index))
        .nest("/admin", admin::routes())
}
