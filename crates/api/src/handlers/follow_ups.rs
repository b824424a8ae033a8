//! Handlers for follow-up meetings. Email dispatch is out of scope; only
//! the booking itself is recorded.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::types::DbId;
use kompass_core::validation::require_present;
use kompass_db::models::follow_up::{CreateFollowUp, FollowUp};
use kompass_db::repositories::FollowUpRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the follow-up listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpQuery {
    /// Restrict to follow-ups addressed to this email.
    pub to_email: Option<String>,
}

/// POST /api/v1/followups
pub async fn create(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateFollowUp>,
) -> AppResult<(StatusCode, Json<DataResponse<FollowUp>>)> {
    let participant_id = input.participant_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Required field 'participantId' is missing".into(),
        ))
    })?;
    let check = |value: &Option<String>, field: &'static str| -> Result<(), AppError> {
        require_present(value, field)
            .map(|_| ())
            .map_err(|e| AppError::Core(CoreError::Validation(e)))
    };
    check(&input.from_name, "fromName")?;
    check(&input.from_email, "fromEmail")?;
    check(&input.to_email, "toEmail")?;
    check(&input.subject, "subject")?;
    if input.date.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Required field 'date' is missing".into(),
        )));
    }

    let follow_up =
        FollowUpRepo::create(&state.pool, participant_id, &input, &user.username).await?;

    tracing::info!(
        participant_id,
        follow_up_id = follow_up.id,
        actor = %user.username,
        "Follow-up booked"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: follow_up })))
}

/// GET /api/v1/followups[?toEmail=..]
pub async fn list(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Query(query): Query<FollowUpQuery>,
) -> AppResult<Json<DataResponse<Vec<FollowUp>>>> {
    let follow_ups = match query.to_email.as_deref() {
        Some(email) => FollowUpRepo::list_by_email(&state.pool, email).await?,
        None => FollowUpRepo::list_all(&state.pool).await?,
    };
    Ok(Json(DataResponse { data: follow_ups }))
}

/// GET /api/v1/participants/{id}/followups
pub async fn list_by_participant(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<FollowUp>>>> {
    user.ensure_participant_access(participant_id)?;
    let follow_ups = FollowUpRepo::list_by_participant(&state.pool, participant_id).await?;
    Ok(Json(DataResponse { data: follow_ups }))
}
