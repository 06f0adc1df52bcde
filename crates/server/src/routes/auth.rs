//! Authentication route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::{OptionalUser, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::{AuthService, SignUpRequest};
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub contact: String,
    pub facebook: Option<String>,
    pub campus: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Create an account and log it in on this session.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.pool(), &state.config().admin_username);

    let user = auth
        .sign_up(SignUpRequest {
            username: body.username,
            password: body.password,
            contact: body.contact,
            facebook: body.facebook,
            campus: body.campus,
        })
        .await?;

    let identity = auth.identity(&user);
    set_current_user(&session, &identity)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(user_id = %user.id, "account created");

    Ok((StatusCode::CREATED, Json(identity)))
}

/// Login with username and password.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.pool(), &state.config().admin_username);

    let user = auth.login(&body.username, &body.password).await?;
    let identity = auth.identity(&user);

    // Fresh session id on privilege change
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    set_current_user(&session, &identity)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(identity))
}

/// Logout: drop the whole session, identity and cart included.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<impl IntoResponse> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}

/// The identity logged in on this session, or null.
#[instrument(skip_all)]
pub async fn me(OptionalUser(user): OptionalUser) -> Json<Option<CurrentUser>> {
    Json(user)
}
