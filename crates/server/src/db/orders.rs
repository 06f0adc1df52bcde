//! Order repository for database operations.
//!
//! Orders and their line items are written in one transaction; a failed
//! checkout therefore leaves no partial rows behind. Both the shopper
//! and admin listings read the same `orders` table - the user view is
//! just an indexed filter, there is no denormalized per-user copy.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::SqlitePool;

use soycart_core::{OrderId, OrderStatus, UserId};

use super::RepositoryError;
use crate::models::order::{NewOrder, Order, OrderItem};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist an order and its line items atomically.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails; the
    /// transaction is rolled back and nothing is written.
    pub async fn create(&self, new_order: &NewOrder) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let mut order = sqlx::query_as::<_, Order>(
            r"
            INSERT INTO orders (user_id, delivery_option, delivery_fee, total, status, campus, contact, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING id, user_id, delivery_option, delivery_fee, total, status, campus, contact, created_at
            ",
        )
        .bind(new_order.user_id)
        .bind(new_order.delivery_option)
        .bind(new_order.delivery_fee)
        .bind(new_order.total)
        .bind(OrderStatus::Pending)
        .bind(&new_order.campus)
        .bind(&new_order.contact)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        for item in &new_order.items {
            let line = sqlx::query_as::<_, OrderItem>(
                r"
                INSERT INTO order_items (order_id, product_id, product_name, unit_price, quantity)
                VALUES (?1, ?2, ?3, ?4, ?5)
                RETURNING id, order_id, product_id, product_name, unit_price, quantity
                ",
            )
            .bind(order.id)
            .bind(item.product_id)
            .bind(&item.product_name)
            .bind(item.unit_price)
            .bind(item.quantity)
            .fetch_one(&mut *tx)
            .await?;

            order.items.push(line);
        }

        tx.commit().await?;

        Ok(order)
    }

    /// Get an order with its line items by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, delivery_option, delivery_fee, total, status, campus, contact, created_at
            FROM orders
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(mut order) = order else {
            return Ok(None);
        };

        order.items = sqlx::query_as::<_, OrderItem>(
            r"
            SELECT id, order_id, product_id, product_name, unit_price, quantity
            FROM order_items
            WHERE order_id = ?1
            ORDER BY id
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some(order))
    }

    /// List one user's orders, newest first, line items attached.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, delivery_option, delivery_fee, total, status, campus, contact, created_at
            FROM orders
            WHERE user_id = ?1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        let items = sqlx::query_as::<_, OrderItem>(
            r"
            SELECT oi.id, oi.order_id, oi.product_id, oi.product_name, oi.unit_price, oi.quantity
            FROM order_items oi
            JOIN orders o ON o.id = oi.order_id
            WHERE o.user_id = ?1
            ORDER BY oi.id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(attach_items(orders, items))
    }

    /// List every order, newest first, line items attached.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, delivery_option, delivery_fee, total, status, campus, contact, created_at
            FROM orders
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        let items = sqlx::query_as::<_, OrderItem>(
            r"
            SELECT id, order_id, product_id, product_name, unit_price, quantity
            FROM order_items
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(attach_items(orders, items))
    }

    /// Set an order's status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE orders
            SET status = ?1
            WHERE id = ?2
            ",
        )
        .bind(status)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Group fetched line items under their orders, preserving order order.
fn attach_items(orders: Vec<Order>, items: Vec<OrderItem>) -> Vec<Order> {
    let mut by_order: HashMap<OrderId, Vec<OrderItem>> = HashMap::new();
    for item in items {
        by_order.entry(item.order_id).or_default().push(item);
    }

    orders
        .into_iter()
        .map(|mut order| {
            order.items = by_order.remove(&order.id).unwrap_or_default();
            order
        })
        .collect()
}
