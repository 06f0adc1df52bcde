//! Announcement feed service.

use sqlx::SqlitePool;
use thiserror::Error;

use soycart_core::AnnouncementId;

use crate::db::RepositoryError;
use crate::db::announcements::{AnnouncementPatch, AnnouncementRepository};
use crate::models::announcement::Announcement;

/// Errors that can occur managing announcements.
#[derive(Debug, Error)]
pub enum AnnouncementError {
    /// Title must not be blank.
    #[error("title cannot be empty")]
    EmptyTitle,

    /// Message must not be blank.
    #[error("message cannot be empty")]
    EmptyMessage,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Announcement feed service.
pub struct AnnouncementService<'a> {
    announcements: AnnouncementRepository<'a>,
}

impl<'a> AnnouncementService<'a> {
    /// Create a new announcement service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            announcements: AnnouncementRepository::new(pool),
        }
    }

    /// Announcements currently shown to shoppers, newest first.
    ///
    /// # Errors
    ///
    /// Returns `AnnouncementError::Repository` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<Announcement>, AnnouncementError> {
        let announcements = self.announcements.list_active().await?;
        Ok(announcements)
    }

    /// Every announcement, newest first (admin surface).
    ///
    /// # Errors
    ///
    /// Returns `AnnouncementError::Repository` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Announcement>, AnnouncementError> {
        let announcements = self.announcements.list_all().await?;
        Ok(announcements)
    }

    /// Create an announcement; new entries are active by default.
    ///
    /// # Errors
    ///
    /// Returns `AnnouncementError::EmptyTitle` / `EmptyMessage` on blank
    /// input, `AnnouncementError::Repository` if the insert fails.
    pub async fn create(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Announcement, AnnouncementError> {
        let title = title.trim();
        let message = message.trim();

        if title.is_empty() {
            return Err(AnnouncementError::EmptyTitle);
        }
        if message.is_empty() {
            return Err(AnnouncementError::EmptyMessage);
        }

        let announcement = self.announcements.create(title, message).await?;
        Ok(announcement)
    }

    /// Apply a partial edit; omitted fields keep their value.
    ///
    /// # Errors
    ///
    /// Returns `AnnouncementError::Repository` wrapping `NotFound` if
    /// the announcement doesn't exist.
    pub async fn update(
        &self,
        id: AnnouncementId,
        patch: AnnouncementPatch,
    ) -> Result<Announcement, AnnouncementError> {
        if let Some(title) = &patch.title
            && title.trim().is_empty()
        {
            return Err(AnnouncementError::EmptyTitle);
        }
        if let Some(message) = &patch.message
            && message.trim().is_empty()
        {
            return Err(AnnouncementError::EmptyMessage);
        }

        self.announcements.update(id, &patch).await?;

        self.announcements
            .get_by_id(id)
            .await?
            .ok_or(AnnouncementError::Repository(RepositoryError::NotFound))
    }

    /// Delete an announcement.
    ///
    /// # Errors
    ///
    /// Returns `AnnouncementError::Repository` wrapping `NotFound` if
    /// the announcement doesn't exist.
    pub async fn delete(&self, id: AnnouncementId) -> Result<(), AnnouncementError> {
        if !self.announcements.delete(id).await? {
            return Err(AnnouncementError::Repository(RepositoryError::NotFound));
        }
        Ok(())
    }
}
