//! Handlers for shared tips.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::types::DbId;
use kompass_core::validation::require_present;
use kompass_db::models::tip::{CreateTip, Tip};
use kompass_db::repositories::TipRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/tips
pub async fn create(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateTip>,
) -> AppResult<(StatusCode, Json<DataResponse<Tip>>)> {
    require_present(&input.text, "text").map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    if input.expire_date.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Required field 'expireDate' is missing".into(),
        )));
    }

    let tip = TipRepo::create(&state.pool, &input).await?;
    tracing::info!(tip_id = tip.id, actor = %user.username, "Tip added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: tip })))
}

/// GET /api/v1/tips
///
/// Only unexpired tips are listed.
pub async fn list_active(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Tip>>>> {
    let tips = TipRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: tips }))
}

/// DELETE /api/v1/tips/{id}
pub async fn delete(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TipRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Tip", id }))
    }
}
