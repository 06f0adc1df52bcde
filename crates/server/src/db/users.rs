//! User repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use soycart_core::{ContactNumber, UserId, Username};

use super::RepositoryError;
use crate::models::user::{NewUser, User};

/// Row shape for login lookups, carrying the hash alongside the account.
#[derive(sqlx::FromRow)]
struct UserWithHashRow {
    id: UserId,
    username: Username,
    contact: ContactNumber,
    facebook: Option<String>,
    campus: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    password_hash: String,
}

impl UserWithHashRow {
    fn split(self) -> (User, String) {
        (
            User {
                id: self.id,
                username: self.username,
                contact: self.contact,
                facebook: self.facebook,
                campus: self.campus,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            self.password_hash,
        )
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a user by username.
    ///
    /// The lookup is case-insensitive: the `username` column carries
    /// `COLLATE NOCASE`, matching account-uniqueness rules.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            SELECT id, username, contact, facebook, campus, created_at, updated_at
            FROM users
            WHERE username = ?1
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            SELECT id, username, contact, facebook, campus, created_at, updated_at
            FROM users
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Create a new account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username is already
    /// registered under any case variant.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new_user: &NewUser) -> Result<User, RepositoryError> {
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r"
            INSERT INTO users (username, password_hash, contact, facebook, campus, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
            RETURNING id, username, contact, facebook, campus, created_at, updated_at
            ",
        )
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .bind(&new_user.contact)
        .bind(&new_user.facebook)
        .bind(&new_user.campus)
        .bind(now)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("username already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(user)
    }

    /// Get a user's password hash by username.
    ///
    /// Returns `None` if no account exists under that username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        username: &Username,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, UserWithHashRow>(
            r"
            SELECT id, username, contact, facebook, campus, created_at, updated_at, password_hash
            FROM users
            WHERE username = ?1
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(UserWithHashRow::split))
    }
}
