//! Announcement repository for database operations.

use chrono::Utc;
use sqlx::SqlitePool;

use soycart_core::AnnouncementId;

use super::RepositoryError;
use crate::models::announcement::Announcement;

/// Partial update for an announcement; `None` fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct AnnouncementPatch {
    pub title: Option<String>,
    pub message: Option<String>,
    pub active: Option<bool>,
}

/// Repository for announcement database operations.
pub struct AnnouncementRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AnnouncementRepository<'a> {
    /// Create a new announcement repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List announcements shown to shoppers (active only), newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<Announcement>, RepositoryError> {
        let announcements = sqlx::query_as::<_, Announcement>(
            r"
            SELECT id, title, message, active, created_at, updated_at
            FROM announcements
            WHERE active = 1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(announcements)
    }

    /// List every announcement (admin view), newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Announcement>, RepositoryError> {
        let announcements = sqlx::query_as::<_, Announcement>(
            r"
            SELECT id, title, message, active, created_at, updated_at
            FROM announcements
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(announcements)
    }

    /// Get an announcement by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(
        &self,
        id: AnnouncementId,
    ) -> Result<Option<Announcement>, RepositoryError> {
        let announcement = sqlx::query_as::<_, Announcement>(
            r"
            SELECT id, title, message, active, created_at, updated_at
            FROM announcements
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(announcement)
    }

    /// Create an announcement, active by default.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Announcement, RepositoryError> {
        let now = Utc::now();

        let announcement = sqlx::query_as::<_, Announcement>(
            r"
            INSERT INTO announcements (title, message, active, created_at, updated_at)
            VALUES (?1, ?2, 1, ?3, ?3)
            RETURNING id, title, message, active, created_at, updated_at
            ",
        )
        .bind(title)
        .bind(message)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(announcement)
    }

    /// Apply a partial update; omitted fields are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the announcement doesn't
    /// exist. Returns `RepositoryError::Database` for other database
    /// errors.
    pub async fn update(
        &self,
        id: AnnouncementId,
        patch: &AnnouncementPatch,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE announcements
            SET title = COALESCE(?1, title),
                message = COALESCE(?2, message),
                active = COALESCE(?3, active),
                updated_at = ?4
            WHERE id = ?5
            ",
        )
        .bind(&patch.title)
        .bind(&patch.message)
        .bind(patch.active)
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete an announcement.
    ///
    /// # Returns
    ///
    /// Returns `true` if the announcement was deleted, `false` if it
    /// didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: AnnouncementId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM announcements
            WHERE id = ?1
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
