//! Seed the product catalog.
//!
//! Reads catalog entries from a YAML file, or falls back to the
//! built-in soy-milk lineup the stall opened with.

use serde::Deserialize;
use tracing::{info, warn};

use soycart_core::Money;
use soycart_server::config::ServerConfig;
use soycart_server::db::{self, ProductRepository};
use soycart_server::models::product::NewProduct;

/// One catalog entry in a seed file.
///
/// ```yaml
/// - name: Classic
///   emoji: "🥛"
///   price_centavos: 2000
///   stock: 50
/// ```
#[derive(Debug, Deserialize)]
pub struct SeedProduct {
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    pub price_centavos: i64,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub stock: i64,
}

const fn default_available() -> bool {
    true
}

/// The lineup the stall opened with.
fn default_products() -> Vec<SeedProduct> {
    let flavors = [
        ("Classic", "🥛", 2000),
        ("Mango Soya", "🥭", 2500),
        ("Choco Soya", "🍫", 2500),
        ("Strawberry Soya", "🍓", 2500),
        ("Ube Soya", "🍠", 2500),
        ("Coffee Soya", "☕", 2500),
        ("Banana Soya", "🍌", 2500),
    ];

    flavors
        .into_iter()
        .map(|(name, emoji, price_centavos)| SeedProduct {
            name: name.to_owned(),
            emoji: emoji.to_owned(),
            price_centavos,
            available: true,
            stock: 50,
        })
        .collect()
}

/// Seed the catalog from `file`, or the built-in lineup when omitted.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or a database
/// operation fails.
pub async fn products(file: Option<&str>, clear: bool) -> Result<(), Box<dyn std::error::Error>> {
    let entries = match file {
        Some(path) => {
            info!(path = %path, "Loading catalog seed file");
            let content = tokio::fs::read_to_string(path).await?;
            serde_yaml::from_str::<Vec<SeedProduct>>(&content)?
        }
        None => default_products(),
    };

    for entry in &entries {
        if entry.price_centavos <= 0 {
            return Err(format!("product '{}' has a non-positive price", entry.name).into());
        }
    }

    let config = ServerConfig::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;
    info!("Connected to database");

    if clear {
        let deleted = sqlx::query("DELETE FROM products")
            .execute(&pool)
            .await?
            .rows_affected();
        warn!(deleted, "Cleared existing products");
    }

    let repository = ProductRepository::new(&pool);
    for entry in &entries {
        let product = repository
            .create(&NewProduct {
                name: entry.name.clone(),
                emoji: entry.emoji.clone(),
                price: Money::from_centavos(entry.price_centavos),
                available: entry.available,
                stock: entry.stock,
            })
            .await?;
        info!(id = %product.id, name = %product.name, "Seeded product");
    }

    info!(count = entries.len(), "Catalog seeded");

    Ok(())
}
