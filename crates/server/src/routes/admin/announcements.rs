//! Admin announcement handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use soycart_core::AnnouncementId;

use crate::db::announcements::AnnouncementPatch;
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::Announcement;
use crate::services::announcements::AnnouncementService;
use crate::state::AppState;

/// Create announcement request body.
#[derive(Debug, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub message: String,
}

/// Partial edit request body; omitted fields keep their value.
#[derive(Debug, Deserialize)]
pub struct UpdateAnnouncementRequest {
    pub title: Option<String>,
    pub message: Option<String>,
    pub active: Option<bool>,
}

/// Every announcement, active or not, newest first.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<Announcement>>> {
    let announcements = AnnouncementService::new(state.pool()).list_all().await?;

    Ok(Json(announcements))
}

/// Create an announcement; new entries are active immediately.
#[instrument(skip(state, _admin))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(body): Json<CreateAnnouncementRequest>,
) -> Result<impl IntoResponse> {
    let announcement = AnnouncementService::new(state.pool())
        .create(&body.title, &body.message)
        .await?;

    Ok((StatusCode::CREATED, Json(announcement)))
}

/// Edit an announcement's title, message, or active flag.
#[instrument(skip(state, _admin))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<AnnouncementId>,
    Json(body): Json<UpdateAnnouncementRequest>,
) -> Result<Json<Announcement>> {
    let announcement = AnnouncementService::new(state.pool())
        .update(
            id,
            AnnouncementPatch {
                title: body.title,
                message: body.message,
                active: body.active,
            },
        )
        .await?;

    Ok(Json(announcement))
}

/// Delete an announcement.
#[instrument(skip(state, _admin))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<AnnouncementId>,
) -> Result<impl IntoResponse> {
    AnnouncementService::new(state.pool()).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
