//! Session-related types.
//!
//! Types stored in the session for authentication and cart state.

use serde::{Deserialize, Serialize};

use soycart_core::{UserId, Username};

/// Session-stored identity of the logged-in shopper.
///
/// `is_admin` is derived from configuration at login time and never
/// stored on the user row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's username.
    pub username: Username,
    /// Whether this identity may use the admin surface.
    pub is_admin: bool,
}

/// Session keys for authentication and cart data.
pub mod session_keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for storing the session cart.
    pub const CART: &str = "cart";
}
