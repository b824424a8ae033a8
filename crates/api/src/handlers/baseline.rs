//! Handlers for baseline scores (grundförutsättningar).

use axum::extract::{Path, State};
use axum::Json;
use kompass_core::baseline::{normalize_scores, BaselineScores};
use kompass_core::error::CoreError;
use kompass_core::types::DbId;
use kompass_db::repositories::BaselineRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/v1/participants/{id}/baseline
///
/// Save all five baseline scores in one atomic upsert. The body may carry
/// the scores flat or nested, snake_case or display-name keys; everything
/// is normalized at this boundary.
pub async fn save(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<DataResponse<BaselineScores>>> {
    let scores =
        normalize_scores(&body).map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let saved = BaselineRepo::upsert(&state.pool, participant_id, &scores).await?;
    tracing::info!(participant_id, actor = %user.username, "Baseline scores saved");

    Ok(Json(DataResponse {
        data: BaselineScores {
            fysisk_halsa: saved.fysisk_halsa,
            psykisk_halsa: saved.psykisk_halsa,
            missbruk: saved.missbruk,
            bostadssituation: saved.bostadssituation,
            social_isolering: saved.social_isolering,
        },
    }))
}

/// GET /api/v1/participants/{id}/baseline
///
/// Absent scores read as all zeroes.
pub async fn get(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<BaselineScores>>> {
    user.ensure_participant_access(participant_id)?;

    let scores = match BaselineRepo::find_by_participant(&state.pool, participant_id).await? {
        Some(row) => BaselineScores {
            fysisk_halsa: row.fysisk_halsa,
            psykisk_halsa: row.psykisk_halsa,
            missbruk: row.missbruk,
            bostadssituation: row.bostadssituation,
            social_isolering: row.social_isolering,
        },
        None => BaselineScores::zeroed(),
    };
    Ok(Json(DataResponse { data: scores }))
}
