//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use soycart_core::{ContactNumber, UserId, Username};

/// A storefront account.
///
/// The password hash is deliberately not part of this type; repositories
/// only surface it to the login path.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Account username, unique case-insensitively.
    pub username: Username,
    /// Mobile number used to coordinate pickup/delivery.
    pub contact: ContactNumber,
    /// Optional Facebook handle for order coordination.
    pub facebook: Option<String>,
    /// Campus department the account belongs to.
    pub campus: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create an account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: String,
    pub contact: ContactNumber,
    pub facebook: Option<String>,
    pub campus: String,
}
