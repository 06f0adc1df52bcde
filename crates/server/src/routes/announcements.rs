//! Announcement banner route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::Result;
use crate::models::Announcement;
use crate::services::announcements::AnnouncementService;
use crate::state::AppState;

/// Active announcements, newest first, for the storefront banner.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Announcement>>> {
    let announcements = AnnouncementService::new(state.pool()).list_active().await?;

    Ok(Json(announcements))
}
