//! Handlers for case notes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::types::DbId;
use kompass_core::validation::require_present;
use kompass_db::models::note::{CreateNote, Note};
use kompass_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/participants/{id}/notes
pub async fn create(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
    Json(input): Json<CreateNote>,
) -> AppResult<(StatusCode, Json<DataResponse<Note>>)> {
    let content = require_present(&input.content, "content")
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let note = NoteRepo::create(&state.pool, participant_id, &user.username, content).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// GET /api/v1/participants/{id}/notes
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Note>>>> {
    user.ensure_participant_access(participant_id)?;
    let notes = NoteRepo::list_by_participant(&state.pool, participant_id).await?;
    Ok(Json(DataResponse { data: notes }))
}

/// GET /api/v1/participants/{id}/notes/latest
pub async fn latest(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Option<Note>>>> {
    user.ensure_participant_access(participant_id)?;
    let note = NoteRepo::latest(&state.pool, participant_id).await?;
    Ok(Json(DataResponse { data: note }))
}
