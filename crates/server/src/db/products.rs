//! Product repository for database operations.

use chrono::Utc;
use sqlx::SqlitePool;

use soycart_core::ProductId;

use super::RepositoryError;
use crate::models::product::{NewProduct, Product};

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List the whole catalog, name-ordered.
    ///
    /// Unavailable products are included so the storefront can render
    /// them as sold out.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, emoji, price, available, stock, created_at, updated_at
            FROM products
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, emoji, price, available, stock, created_at, updated_at
            FROM products
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Create a catalog entry (seeding and tests).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new_product: &NewProduct) -> Result<Product, RepositoryError> {
        let now = Utc::now();

        let product = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (name, emoji, price, available, stock, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
            RETURNING id, name, emoji, price, available, stock, created_at, updated_at
            ",
        )
        .bind(&new_product.name)
        .bind(&new_product.emoji)
        .bind(new_product.price)
        .bind(new_product.available)
        .bind(new_product.stock)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// Set a product's availability flag.
    ///
    /// Idempotent; the new flag is visible to the next `list()` call,
    /// there is no caching layer in between.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_availability(
        &self,
        id: ProductId,
        available: bool,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET available = ?1, updated_at = ?2
            WHERE id = ?3
            ",
        )
        .bind(available)
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
