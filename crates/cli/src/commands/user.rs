//! Create accounts from the terminal.

use tracing::info;

use soycart_server::config::ServerConfig;
use soycart_server::db;
use soycart_server::services::auth::{AuthService, SignUpRequest};

/// Create an account with the same validation the signup route applies.
///
/// Useful for bootstrapping the reserved admin account before opening
/// the storefront.
///
/// # Errors
///
/// Returns an error if validation fails, the username is taken, or a
/// database operation fails.
pub async fn create(
    username: &str,
    password: &str,
    contact: &str,
    facebook: Option<String>,
    campus: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;

    let auth = AuthService::new(&pool, &config.admin_username);
    let user = auth
        .sign_up(SignUpRequest {
            username: username.to_owned(),
            password: password.to_owned(),
            contact: contact.to_owned(),
            facebook,
            campus: campus.to_owned(),
        })
        .await?;

    let is_admin = auth.is_admin(&user.username);
    info!(id = %user.id, username = %user.username, is_admin, "Account created");

    Ok(())
}
