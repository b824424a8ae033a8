//! Handlers for chat messages.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::types::DbId;
use kompass_core::validation::require_present;
use kompass_db::models::message::{CreateMessage, Message};
use kompass_db::repositories::MessageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/participants/{id}/messages
///
/// Send a message into the participant's thread. The sender is the
/// authenticated caller; new messages start unread.
pub async fn send(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
    Json(input): Json<CreateMessage>,
) -> AppResult<(StatusCode, Json<DataResponse<Message>>)> {
    user.ensure_participant_access(participant_id)?;
    let text = require_present(&input.text, "text")
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let message = MessageRepo::create(&state.pool, participant_id, &user.username, text).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// GET /api/v1/participants/{id}/messages
///
/// Opening the thread marks every unread message read.
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Message>>>> {
    user.ensure_participant_access(participant_id)?;
    let messages = MessageRepo::list_and_mark_read(&state.pool, participant_id).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// GET /api/v1/participants/{id}/messages/unread-count
pub async fn unread_count(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<i64>>> {
    user.ensure_participant_access(participant_id)?;
    let count = MessageRepo::unread_count(&state.pool, participant_id).await?;
    Ok(Json(DataResponse { data: count }))
}

/// GET /api/v1/messages
///
/// Every thread, read-only: listing here never flips read status.
pub async fn list_all(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Message>>>> {
    let messages = MessageRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: messages }))
}
