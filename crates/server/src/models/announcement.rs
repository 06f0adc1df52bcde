//! Announcement banner types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use soycart_core::AnnouncementId;

/// A storefront announcement.
///
/// Shoppers only ever see active announcements; the admin surface sees
/// and edits all of them.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Announcement {
    /// Unique announcement ID.
    pub id: AnnouncementId,
    /// Short headline shown in the banner.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Whether the announcement is currently shown to shoppers.
    pub active: bool,
    /// When the announcement was created.
    pub created_at: DateTime<Utc>,
    /// When the announcement was last edited.
    pub updated_at: DateTime<Utc>,
}
