//! Handlers for participant summary snapshots.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::types::DbId;
use kompass_core::validation::require_present;
use kompass_db::models::summary::{CreateSummary, Summary};
use kompass_db::repositories::SummaryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/participants/{id}/summary
///
/// Append a new snapshot; earlier snapshots are kept but superseded.
pub async fn save(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
    Json(input): Json<CreateSummary>,
) -> AppResult<(StatusCode, Json<DataResponse<Summary>>)> {
    let text = require_present(&input.summary, "summary")
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let summary = SummaryRepo::create(&state.pool, participant_id, text).await?;
    tracing::info!(participant_id, actor = %user.username, "Summary saved");

    Ok((StatusCode::CREATED, Json(DataResponse { data: summary })))
}

/// GET /api/v1/participants/{id}/summary
///
/// The latest snapshot, `null` when none exists.
pub async fn latest(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Option<Summary>>>> {
    user.ensure_participant_access(participant_id)?;
    let summary = SummaryRepo::latest(&state.pool, participant_id).await?;
    Ok(Json(DataResponse { data: summary }))
}
