//! Integration test support for SoyCart.
//!
//! Tests run against an in-memory `SQLite` database with the real
//! migrations applied, exercising the same services the route handlers
//! call. No network or running server is required.
//!
//! # Usage
//!
//! ```rust,ignore
//! let ctx = TestContext::new().await;
//! let products = ctx.seed_catalog().await;
//! let user = ctx.sign_up("aling_nena").await;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use soycart_core::{Money, Username};
use soycart_server::db::MIGRATOR;
use soycart_server::db::products::ProductRepository;
use soycart_server::models::product::{NewProduct, Product};
use soycart_server::models::user::User;
use soycart_server::services::announcements::AnnouncementService;
use soycart_server::services::auth::{AuthService, SignUpRequest};
use soycart_server::services::catalog::CatalogService;
use soycart_server::services::orders::OrderService;

/// Reserved admin username used across the test suite.
pub const ADMIN_USERNAME: &str = "technoAdmin";

/// Per-item delivery fee used across the test suite (₱5.00).
pub const DELIVERY_FEE: Money = Money::from_centavos(500);

/// Shared test fixture: migrated in-memory database plus the config
/// values the services need.
pub struct TestContext {
    pub pool: SqlitePool,
    pub admin_username: Username,
}

impl TestContext {
    /// Create a fresh in-memory database with all migrations applied.
    ///
    /// # Panics
    ///
    /// Panics if the database cannot be created or migrated.
    pub async fn new() -> Self {
        // A single connection keeps every query on the same in-memory DB
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");

        MIGRATOR.run(&pool).await.expect("failed to run migrations");

        Self {
            pool,
            admin_username: ADMIN_USERNAME.parse().expect("valid admin username"),
        }
    }

    /// Auth service wired to this context's database.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.pool, &self.admin_username)
    }

    /// Catalog service wired to this context's database.
    #[must_use]
    pub fn catalog(&self) -> CatalogService<'_> {
        CatalogService::new(&self.pool)
    }

    /// Order service wired to this context's database.
    #[must_use]
    pub fn orders(&self) -> OrderService<'_> {
        OrderService::new(&self.pool, DELIVERY_FEE)
    }

    /// Announcement service wired to this context's database.
    #[must_use]
    pub fn announcements(&self) -> AnnouncementService<'_> {
        AnnouncementService::new(&self.pool)
    }

    /// Seed a small catalog: Classic ₱20, Mango Soya ₱25.
    ///
    /// # Panics
    ///
    /// Panics if seeding fails.
    pub async fn seed_catalog(&self) -> Vec<Product> {
        let repository = ProductRepository::new(&self.pool);
        let mut products = Vec::new();

        for (name, emoji, centavos) in [("Classic", "🥛", 2000), ("Mango Soya", "🥭", 2500)] {
            let product = repository
                .create(&NewProduct {
                    name: name.to_owned(),
                    emoji: emoji.to_owned(),
                    price: Money::from_centavos(centavos),
                    available: true,
                    stock: 50,
                })
                .await
                .expect("failed to seed product");
            products.push(product);
        }

        products
    }

    /// Create an account with defaults good enough for most tests.
    ///
    /// # Panics
    ///
    /// Panics if signup fails.
    pub async fn sign_up(&self, username: &str) -> User {
        self.auth()
            .sign_up(SignUpRequest {
                username: username.to_owned(),
                password: "soymilk-forever".to_owned(),
                contact: "09171234567".to_owned(),
                facebook: Some("fb.com/soyfan".to_owned()),
                campus: "CET Department".to_owned(),
            })
            .await
            .expect("failed to sign up test user")
    }
}
