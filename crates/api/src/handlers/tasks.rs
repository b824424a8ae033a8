//! Handlers for SMART tasks.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::types::DbId;
use kompass_core::validation::{require_present, validate_percentage};
use kompass_db::models::task::{CreateTask, Task};
use kompass_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/tasks
pub async fn create(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<DataResponse<Task>>)> {
    let participant_id = input.participant_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Required field 'participantId' is missing".into(),
        ))
    })?;
    require_present(&input.specific, "specific")
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    if let Some(progress) = input.progress {
        validate_percentage(progress, "progress")
            .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    }

    let task = TaskRepo::create(&state.pool, participant_id, &input, &user.username).await?;
    tracing::info!(participant_id, task_id = task.id, actor = %user.username, "Task added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// GET /api/v1/participants/{id}/tasks
pub async fn list_by_participant(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Task>>>> {
    user.ensure_participant_access(participant_id)?;
    let tasks = TaskRepo::list_by_participant(&state.pool, participant_id).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// GET /api/v1/tasks
pub async fn list_all(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Task>>>> {
    let tasks = TaskRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// PUT /api/v1/tasks/{id}/complete
pub async fn complete(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Task>>> {
    let task = TaskRepo::complete(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;

    tracing::info!(task_id, "Task completed");
    Ok(Json(DataResponse { data: task }))
}
