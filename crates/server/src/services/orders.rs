//! Order lifecycle service.
//!
//! Turns a cart into a persisted order at checkout and drives the
//! `pending ⇄ delivered` status machine from the admin surface.

use sqlx::SqlitePool;
use thiserror::Error;

use soycart_core::{DeliveryOption, Money, OrderId, OrderStatus, UserId};

use crate::db::RepositoryError;
use crate::db::orders::OrderRepository;
use crate::db::products::ProductRepository;
use crate::models::cart::Cart;
use crate::models::order::{NewOrder, NewOrderItem, Order};
use crate::models::user::User;

/// Errors that can occur in the order lifecycle.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Checkout was attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A cart line refers to a product that has been made unavailable.
    #[error("{0} is currently unavailable")]
    ProductUnavailable(String),

    /// A cart line refers to a product that no longer exists.
    #[error("{0} is no longer in the catalog")]
    ProductMissing(String),

    /// Persisting the order failed; the caller's cart must be kept.
    #[error("order could not be created")]
    CreationFailed(#[source] RepositoryError),

    /// Repository/database error outside checkout.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Order lifecycle service.
pub struct OrderService<'a> {
    orders: OrderRepository<'a>,
    products: ProductRepository<'a>,
    delivery_fee: Money,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    ///
    /// `delivery_fee` is the per-item surcharge applied when the shopper
    /// chooses delivery over pickup.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool, delivery_fee: Money) -> Self {
        Self {
            orders: OrderRepository::new(pool),
            products: ProductRepository::new(pool),
            delivery_fee,
        }
    }

    /// Turn `cart` into a persisted order for `user`.
    ///
    /// Availability is re-checked here: a product toggled off after it
    /// was added to the cart aborts the checkout. Pricing follows the
    /// per-item rule - each line costs quantity × (unit price + fee),
    /// where the fee applies only when `delivery_option` is delivery.
    ///
    /// On any error nothing is written; the caller must keep its cart
    /// so the shopper can retry.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::EmptyCart` for an empty cart,
    /// `OrderError::ProductUnavailable` / `OrderError::ProductMissing`
    /// when checkout-time re-validation fails, and
    /// `OrderError::CreationFailed` if persistence fails.
    pub async fn checkout(
        &self,
        user: &User,
        cart: &Cart,
        delivery_option: DeliveryOption,
    ) -> Result<Order, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        // Stale cart lines are tolerated until this point; re-validate
        // each product before touching the database.
        for line in cart.items() {
            let product = self
                .products
                .get_by_id(line.product_id)
                .await?
                .ok_or_else(|| OrderError::ProductMissing(line.name.clone()))?;

            if !product.available {
                return Err(OrderError::ProductUnavailable(product.name));
            }
        }

        let delivery_fee = match delivery_option {
            DeliveryOption::Delivery => self.delivery_fee,
            DeliveryOption::Pickup => Money::ZERO,
        };

        let new_order = NewOrder {
            user_id: user.id,
            delivery_option,
            delivery_fee,
            total: cart.total(delivery_option, self.delivery_fee),
            campus: user.campus.clone(),
            contact: user.contact.clone(),
            items: cart
                .items()
                .iter()
                .map(|line| NewOrderItem {
                    product_id: line.product_id,
                    product_name: line.name.clone(),
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                })
                .collect(),
        };

        self.orders
            .create(&new_order)
            .await
            .map_err(OrderError::CreationFailed)
    }

    /// Set an order's status (admin surface).
    ///
    /// Both `pending → delivered` and `delivered → pending` are valid;
    /// the shopper and admin listings read the same row, so the change
    /// is immediately visible in both.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` wrapping `NotFound` if the order
    /// doesn't exist.
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<(), OrderError> {
        self.orders.set_status(id, status).await?;
        Ok(())
    }

    /// One user's order history, newest first.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.list_for_user(user_id).await?;
        Ok(orders)
    }

    /// Every order, newest first (admin surface).
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.list_all().await?;
        Ok(orders)
    }

    /// Get one order by ID.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` if the query fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        let order = self.orders.get_by_id(id).await?;
        Ok(order)
    }
}
