//! Authentication service.
//!
//! Provides password signup and login, plus admin derivation from the
//! reserved username in configuration.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::SqlitePool;

use soycart_core::{ContactNumber, UserId, Username};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::session::CurrentUser;
use crate::models::user::{NewUser, User};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Signup request fields, as received from the presentation layer.
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
    pub contact: String,
    pub facebook: Option<String>,
    pub campus: String,
}

/// Authentication service.
///
/// Handles account registration and login. The acting identity is
/// always passed in or returned explicitly; the service keeps no
/// ambient "current user" state.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    admin_username: &'a Username,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    ///
    /// `admin_username` is the reserved account name whose identity is
    /// granted the admin surface.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool, admin_username: &'a Username) -> Self {
        Self {
            users: UserRepository::new(pool),
            admin_username,
        }
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username format is invalid.
    /// Returns `AuthError::InvalidContact` unless the contact is 10-13 digits.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UsernameTaken` if the username is already
    /// registered under any case variant.
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<User, AuthError> {
        let username = Username::parse(&request.username)?;
        let contact = ContactNumber::parse(&request.contact)?;

        validate_password(&request.password)?;
        let password_hash = hash_password(&request.password)?;

        let user = self
            .users
            .create(&NewUser {
                username,
                password_hash,
                contact,
                facebook: request.facebook,
                campus: request.campus,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UsernameTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Login with username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if no account exists under the
    /// username. Returns `AuthError::InvalidCredentials` if the password
    /// is wrong.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        // An ill-formed username cannot name an account
        let username = Username::parse(username).map_err(|_| AuthError::UserNotFound)?;

        let (user, password_hash) = self
            .users
            .get_password_hash(&username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        verify_password(password, &password_hash)?;

        Ok(user)
    }

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the user doesn't exist.
    pub async fn get_user(&self, user_id: UserId) -> Result<User, AuthError> {
        self.users
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Whether this username holds admin privileges.
    #[must_use]
    pub fn is_admin(&self, username: &Username) -> bool {
        username.eq_ignore_case(self.admin_username)
    }

    /// Build the session identity for a logged-in user.
    #[must_use]
    pub fn identity(&self, user: &User) -> CurrentUser {
        CurrentUser {
            id: user.id,
            username: user.username.clone(),
            is_admin: self.is_admin(&user.username),
        }
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_password_too_short() {
        assert!(matches!(
            validate_password("short"),
            Err(AuthError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_validate_password_ok() {
        assert!(validate_password("longenough").is_ok());
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("soy-milk-4ever").unwrap();
        assert!(verify_password("soy-milk-4ever", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong-password", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
