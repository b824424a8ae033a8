//! Handlers for intake step progress.

use axum::extract::{Path, State};
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::steps::{validate_step, STEP_NOT_STARTED};
use kompass_core::types::DbId;
use kompass_db::models::step::{CurrentStep, SaveStep, StepProgress};
use kompass_db::repositories::StepRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/v1/participants/{id}/steps
///
/// Save the participant's current step. Last write wins; no history.
pub async fn save(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
    Json(input): Json<SaveStep>,
) -> AppResult<Json<DataResponse<StepProgress>>> {
    validate_step(input.step).map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let progress = StepRepo::upsert(&state.pool, participant_id, input.step, &user.username).await?;
    tracing::info!(
        participant_id,
        step = input.step,
        actor = %user.username,
        "Step saved"
    );
    Ok(Json(DataResponse { data: progress }))
}

/// GET /api/v1/participants/{id}/steps
///
/// A participant without a saved step is reported as step 0.
pub async fn get(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<CurrentStep>>> {
    user.ensure_participant_access(participant_id)?;

    let current = match StepRepo::find_by_participant(&state.pool, participant_id).await? {
        Some(row) => CurrentStep {
            step: row.step,
            username: Some(row.username),
        },
        None => CurrentStep {
            step: STEP_NOT_STARTED,
            username: None,
        },
    };
    Ok(Json(DataResponse { data: current }))
}

/// GET /api/v1/steps
pub async fn list_all(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<StepProgress>>>> {
    let steps = StepRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: steps }))
}
