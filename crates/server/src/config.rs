//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SOYCART_DATABASE_URL` - `SQLite` connection string
//!   (e.g. `sqlite://soycart.db`); falls back to `DATABASE_URL`
//!
//! ## Optional
//! - `SOYCART_HOST` - Bind address (default: 127.0.0.1)
//! - `SOYCART_PORT` - Listen port (default: 3000)
//! - `SOYCART_DELIVERY_FEE` - Per-item delivery surcharge in centavos
//!   (default: 500)
//! - `SOYCART_ADMIN_USERNAME` - Reserved admin account name
//!   (default: technoAdmin)
//! - `SOYCART_SECURE_COOKIES` - Set `true` behind HTTPS (default: false;
//!   the stall runs over plain HTTP on the campus LAN)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

use soycart_core::{Money, Username};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `SQLite` database connection URL
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Per-item delivery surcharge applied at checkout
    pub delivery_fee: Money,
    /// Reserved username granted the admin surface
    pub admin_username: Username,
    /// Whether session cookies are marked Secure
    pub secure_cookies: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or any
    /// variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("SOYCART_DATABASE_URL")?;
        let host = get_env_or_default("SOYCART_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SOYCART_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SOYCART_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SOYCART_PORT".to_string(), e.to_string()))?;
        let delivery_fee = parse_delivery_fee(&get_env_or_default("SOYCART_DELIVERY_FEE", "500"))
            .map_err(|e| ConfigError::InvalidEnvVar("SOYCART_DELIVERY_FEE".to_string(), e))?;
        let admin_username = get_env_or_default("SOYCART_ADMIN_USERNAME", "technoAdmin")
            .parse::<Username>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SOYCART_ADMIN_USERNAME".to_string(), e.to_string())
            })?;
        let secure_cookies = get_env_or_default("SOYCART_SECURE_COOKIES", "false")
            .parse::<bool>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SOYCART_SECURE_COOKIES".to_string(), e.to_string())
            })?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            delivery_fee,
            admin_username,
            secure_cookies,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a centavo amount into a positive [`Money`] value.
fn parse_delivery_fee(raw: &str) -> Result<Money, String> {
    let centavos = raw.parse::<i64>().map_err(|e| e.to_string())?;
    if centavos < 0 {
        return Err("delivery fee cannot be negative".to_string());
    }
    Ok(Money::from_centavos(centavos))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delivery_fee_valid() {
        assert_eq!(parse_delivery_fee("500").unwrap(), Money::from_pesos(5));
        assert_eq!(parse_delivery_fee("0").unwrap(), Money::ZERO);
    }

    #[test]
    fn test_parse_delivery_fee_rejects_negative() {
        assert!(parse_delivery_fee("-100").is_err());
    }

    #[test]
    fn test_parse_delivery_fee_rejects_non_numeric() {
        assert!(parse_delivery_fee("₱5.00").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            database_url: SecretString::from("sqlite::memory:"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            delivery_fee: Money::from_pesos(5),
            admin_username: "technoAdmin".parse().unwrap(),
            secure_cookies: false,
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
