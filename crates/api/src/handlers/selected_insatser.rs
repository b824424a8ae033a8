//! Handlers for selections and decisions on (participant, insats) pairs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::steps::validate_step;
use kompass_core::types::DbId;
use kompass_core::validation::require_present;
use kompass_db::models::selected_insats::{
    EndInsats, RecordDecision, SelectInsatser, SelectedInsats,
};
use kompass_db::repositories::SelectedInsatsRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/participants/{id}/insatser
///
/// Select a batch of catalog templates at a step, all-or-nothing.
/// Re-selecting an already-selected insats moves it to the new step.
pub async fn select(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
    Json(input): Json<SelectInsatser>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<SelectedInsats>>>)> {
    validate_step(input.step).map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    if input.insats_ids.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "At least one insats must be selected".into(),
        )));
    }

    let selected = SelectedInsatsRepo::select_for_participant(
        &state.pool,
        participant_id,
        input.step,
        &input.insats_ids,
    )
    .await?;

    tracing::info!(
        participant_id,
        step = input.step,
        count = selected.len(),
        actor = %user.username,
        "Insatser selected"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: selected })))
}

/// GET /api/v1/participants/{id}/insatser
pub async fn list_by_participant(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<SelectedInsats>>>> {
    user.ensure_participant_access(participant_id)?;
    let selections = SelectedInsatsRepo::list_by_participant(&state.pool, participant_id).await?;
    Ok(Json(DataResponse { data: selections }))
}

/// GET /api/v1/selected-insatser
pub async fn list_all(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SelectedInsats>>>> {
    let selections = SelectedInsatsRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: selections }))
}

/// GET /api/v1/participants/{id}/insatser/{insats_id}
pub async fn get_by_pair(
    user: AuthUser,
    State(state): State<AppState>,
    Path((participant_id, insats_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<SelectedInsats>>> {
    user.ensure_participant_access(participant_id)?;
    let selection = SelectedInsatsRepo::find_by_pair(&state.pool, participant_id, insats_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SelectedInsats",
            id: insats_id,
        }))?;
    Ok(Json(DataResponse { data: selection }))
}

/// PUT /api/v1/participants/{id}/insatser/{insats_id}/decision
///
/// Record (or overwrite) the formal decision for a pair. One upsert keyed
/// on the unique (participant, insats) pair.
pub async fn record_decision(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path((participant_id, insats_id)): Path<(DbId, DbId)>,
    Json(input): Json<RecordDecision>,
) -> AppResult<Json<DataResponse<SelectedInsats>>> {
    let check = |value: &Option<String>, field: &'static str| -> Result<(), AppError> {
        require_present(value, field)
            .map(|_| ())
            .map_err(|e| AppError::Core(CoreError::Validation(e)))
    };
    check(&input.bestallare, "bestallare")?;
    check(&input.beslut, "beslut")?;
    check(&input.executor, "executor")?;
    if input.start_date.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Required field 'startDate' is missing".into(),
        )));
    }
    if input.end_date.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Required field 'endDate' is missing".into(),
        )));
    }

    let decision =
        SelectedInsatsRepo::record_decision(&state.pool, participant_id, insats_id, &input).await?;

    tracing::info!(
        participant_id,
        insats_id,
        actor = %user.username,
        "Decision recorded"
    );

    Ok(Json(DataResponse { data: decision }))
}

/// PUT /api/v1/participants/{id}/insatser/{insats_id}/end
///
/// End an insats: a one-way transition. Ending twice is a 409.
pub async fn end(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path((participant_id, insats_id)): Path<(DbId, DbId)>,
    Json(input): Json<EndInsats>,
) -> AppResult<Json<DataResponse<SelectedInsats>>> {
    let status = require_present(&input.ending_status, "endingStatus")
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    match SelectedInsatsRepo::end_insats(&state.pool, participant_id, insats_id, status).await? {
        Some(selection) => {
            tracing::info!(
                participant_id,
                insats_id,
                actor = %user.username,
                "Insats ended"
            );
            Ok(Json(DataResponse { data: selection }))
        }
        None if SelectedInsatsRepo::pair_exists(&state.pool, participant_id, insats_id).await? => {
            Err(AppError::Core(CoreError::Conflict(
                "Insats is already ended".into(),
            )))
        }
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "SelectedInsats",
            id: insats_id,
        })),
    }
}
