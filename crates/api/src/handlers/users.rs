//! Admin account management handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::roles::validate_role;
use kompass_core::types::DbId;
use kompass_db::models::login_attempt::LoginAttempt;
use kompass_db::models::user::{PublicUser, UpdateUser};
use kompass_db::repositories::{LoginAttemptRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_ATTEMPT_LIMIT: i64 = 100;

/// GET /api/v1/admin/users
pub async fn list(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PublicUser>>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_by_id(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PublicUser>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(DataResponse {
        data: PublicUser::from(user),
    }))
}

/// PUT /api/v1/admin/users/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<DataResponse<PublicUser>>> {
    if let Some(role) = input.role.as_deref() {
        validate_role(role).map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    }

    let updated = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(user_id = id, actor = %admin.username, "Account updated");
    Ok(Json(DataResponse {
        data: PublicUser::from(updated),
    }))
}

/// DELETE /api/v1/admin/users/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if admin.user_id == id {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot delete your own account".into(),
        )));
    }
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(user_id = id, actor = %admin.username, "Account deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}

/// Query parameters for the login audit listing.
#[derive(Debug, Default, Deserialize)]
pub struct AttemptQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/admin/login-attempts
pub async fn login_attempts(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<AttemptQuery>,
) -> AppResult<Json<DataResponse<Vec<LoginAttempt>>>> {
    let limit = query.limit.unwrap_or(DEFAULT_ATTEMPT_LIMIT).clamp(1, 1000);
    let attempts = LoginAttemptRepo::list(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: attempts }))
}
