//! Cart route handlers.
//!
//! The cart itself lives in the session; these handlers mutate it and
//! hand it to the order service at checkout. The session cart is only
//! cleared after checkout succeeds, so a failed checkout leaves the
//! shopper free to retry.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use soycart_core::{DeliveryOption, Money, ProductId};

use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::models::cart::{Cart, CartItem};
use crate::models::session_keys;
use crate::routes::orders::OrderView;
use crate::services::auth::{AuthError, AuthService};
use crate::services::catalog::CatalogService;
use crate::services::orders::OrderService;
use crate::state::AppState;

/// Cart line display data for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    /// Base unit price in centavos.
    pub unit_price: Money,
    pub unit_price_display: String,
    pub quantity: u32,
    pub line_total_display: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name.clone(),
            unit_price: item.unit_price,
            unit_price_display: item.unit_price.to_string(),
            quantity: item.quantity,
            line_total_display: (item.unit_price * item.quantity).to_string(),
        }
    }
}

/// Cart display data for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    /// Σ quantity × base unit price, in centavos; delivery fees are
    /// applied at checkout, not here.
    pub subtotal: Money,
    pub subtotal_display: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            item_count: cart.item_count(),
            subtotal: cart.subtotal(),
            subtotal_display: cart.subtotal().to_string(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session, defaulting to empty.
async fn get_cart(session: &Session) -> Result<Cart> {
    let cart = session
        .get::<Cart>(session_keys::CART)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .unwrap_or_default();

    Ok(cart)
}

/// Save the cart back into the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session
        .insert(session_keys::CART, cart)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Drop the cart from the session (after successful checkout).
async fn clear_cart(session: &Session) -> Result<()> {
    session
        .remove::<Cart>(session_keys::CART)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(())
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
}

/// Update cart request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: ProductId,
}

/// Checkout request body.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub delivery_option: DeliveryOption,
}

/// Show the session cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = get_cart(&session).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Add one unit of a product to the cart.
///
/// Merges by product id; unavailable products are rejected and the
/// cart is left unchanged.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let product = CatalogService::new(state.pool())
        .get(body.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", body.product_id)))?;

    let mut cart = get_cart(&session).await?;
    cart.add(&product)?;
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Set a cart line's quantity (clamped to a minimum of 1).
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(body): Json<UpdateCartRequest>,
) -> Result<Json<CartView>> {
    let mut cart = get_cart(&session).await?;
    cart.set_quantity(body.product_id, body.quantity);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Remove a cart line.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(body): Json<RemoveFromCartRequest>,
) -> Result<Json<CartView>> {
    let mut cart = get_cart(&session).await?;
    cart.remove(body.product_id);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Turn the cart into an order.
///
/// On success the session cart is cleared; on any failure it is left
/// untouched so the shopper can retry.
#[instrument(skip(state, session, user))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    RequireUser(user): RequireUser,
    Json(body): Json<CheckoutRequest>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.pool(), &state.config().admin_username);
    let account = auth.get_user(user.id).await.map_err(|e| match e {
        AuthError::UserNotFound => AppError::Unauthorized("account no longer exists".to_string()),
        other => AppError::Auth(other),
    })?;

    let cart = get_cart(&session).await?;

    let order = OrderService::new(state.pool(), state.config().delivery_fee)
        .checkout(&account, &cart, body.delivery_option)
        .await?;

    clear_cart(&session).await?;

    tracing::info!(order_id = %order.id, user_id = %account.id, "order placed");

    Ok((StatusCode::CREATED, Json(OrderView::from(&order))))
}
