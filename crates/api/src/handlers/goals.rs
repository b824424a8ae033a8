//! Handlers for the per-participant goal.

use axum::extract::{Path, State};
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::types::DbId;
use kompass_core::validation::{require_present, validate_percentage};
use kompass_db::models::goal::{Goal, NewGoal, SaveGoal, UpdateGoalProgress};
use kompass_db::repositories::GoalRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/v1/participants/{id}/goals
///
/// Save the participant's goal. One atomic upsert: changing the goal text
/// resets any earlier completion, saving the same text preserves it.
pub async fn save(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
    Json(input): Json<SaveGoal>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let goal_text = require_present(&input.goal, "goal")
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    let progress = input.progress.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Required field 'progress' is missing".into(),
        ))
    })?;
    validate_percentage(progress, "progress")
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    let completion_date = input.completion_date.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Required field 'completionDate' is missing".into(),
        ))
    })?;

    let new_goal = NewGoal {
        goal: goal_text.to_string(),
        progress,
        reflection1: input.reflection1.clone(),
        reflection2: input.reflection2.clone(),
        completion_date,
    };
    let goal = GoalRepo::upsert(&state.pool, participant_id, &new_goal, &user.username).await?;

    tracing::info!(participant_id, actor = %user.username, "Goal saved");
    Ok(Json(DataResponse { data: goal }))
}

/// GET /api/v1/participants/{id}/goals
pub async fn get(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Option<Goal>>>> {
    user.ensure_participant_access(participant_id)?;
    let goal = GoalRepo::find_by_participant(&state.pool, participant_id).await?;
    Ok(Json(DataResponse { data: goal }))
}

/// PUT /api/v1/participants/{id}/goals/{goal_id}/complete
pub async fn complete(
    user: AuthUser,
    State(state): State<AppState>,
    Path((participant_id, goal_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Goal>>> {
    user.ensure_participant_access(participant_id)?;

    let goal = GoalRepo::complete(&state.pool, participant_id, goal_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Goal",
            id: goal_id,
        }))?;

    tracing::info!(participant_id, goal_id, "Goal completed");
    Ok(Json(DataResponse { data: goal }))
}

/// PUT /api/v1/participants/{id}/goals/progress
///
/// Progress-only update; never touches completion state.
pub async fn update_progress(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
    Json(input): Json<UpdateGoalProgress>,
) -> AppResult<Json<DataResponse<Goal>>> {
    user.ensure_participant_access(participant_id)?;

    let progress = input.progress.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Required field 'progress' is missing".into(),
        ))
    })?;
    validate_percentage(progress, "progress")
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let goal = GoalRepo::update_progress(&state.pool, participant_id, progress)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Goal",
            id: participant_id,
        }))?;
    Ok(Json(DataResponse { data: goal }))
}

/// GET /api/v1/goals
pub async fn list_all(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Goal>>>> {
    let goals = GoalRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: goals }))
}
