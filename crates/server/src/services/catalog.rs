//! Catalog service.
//!
//! Product listing and the admin availability toggle. There is no
//! caching layer: a toggle is visible to the very next listing.

use sqlx::SqlitePool;

use soycart_core::ProductId;

use crate::db::RepositoryError;
use crate::db::products::ProductRepository;
use crate::models::product::Product;

/// Catalog service.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// The whole catalog, name-ordered, availability flags included.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        self.products.list().await
    }

    /// Get one product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        self.products.get_by_id(id).await
    }

    /// Toggle a product's availability (admin surface). Idempotent.
    ///
    /// Open carts are not touched; stale lines are caught at checkout.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    pub async fn set_availability(
        &self,
        id: ProductId,
        available: bool,
    ) -> Result<(), RepositoryError> {
        self.products.set_availability(id, available).await
    }
}
