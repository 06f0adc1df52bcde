//! Run embedded schema migrations.

use tracing::info;

use soycart_server::config::ServerConfig;
use soycart_server::db;

/// Run all pending migrations against the configured database.
///
/// # Errors
///
/// Returns an error if configuration is missing, the database cannot be
/// reached, or a migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let pool = db::create_pool(&config.database_url).await?;
    info!("Connected to database");

    db::MIGRATOR.run(&pool).await?;
    info!("Migrations applied");

    Ok(())
}
