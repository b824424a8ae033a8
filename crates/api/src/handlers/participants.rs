//! Handlers for the `/participants` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::types::DbId;
use kompass_core::validation::require_present;
use kompass_db::models::participant::{
    CloseParticipant, NewParticipant, Participant, RegisterParticipant,
};
use kompass_db::repositories::ParticipantRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Validate the registration DTO, naming the first missing field.
fn validate_registration(input: &RegisterParticipant) -> Result<NewParticipant, CoreError> {
    let check = |value: &Option<String>, field: &'static str| -> Result<String, CoreError> {
        require_present(value, field)
            .map(str::to_string)
            .map_err(CoreError::Validation)
    };

    Ok(NewParticipant {
        first_name: check(&input.first_name, "firstName")?,
        last_name: check(&input.last_name, "lastName")?,
        gender: check(&input.gender, "gender")?,
        education: check(&input.education_level, "educationLevel")?,
        license: input.license.clone(),
        personal_number: check(&input.personal_number, "personalNumber")?,
        address: check(&input.address, "address")?,
        postal_code: check(&input.postal_code, "postalCode")?,
        city: check(&input.city, "city")?,
        phone_number: check(&input.phone_number, "phoneNumber")?,
        unemployment_time: check(&input.unemployment_time, "unemploymentTime")?,
        initiated_by: check(&input.initiated_by, "initiatedBy")?,
    })
}

/// POST /api/v1/participants
///
/// Register a participant, stamped with the calling case worker as creator.
pub async fn register(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<RegisterParticipant>,
) -> AppResult<(StatusCode, Json<DataResponse<Participant>>)> {
    let new_participant = validate_registration(&input)?;
    let participant = ParticipantRepo::create(&state.pool, &new_participant, &user.username).await?;

    tracing::info!(
        participant_id = participant.id,
        actor = %user.username,
        "Participant registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: participant }),
    ))
}

/// GET /api/v1/participants
///
/// List the caller's active participants, newest first.
pub async fn list_active(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Participant>>>> {
    let participants = ParticipantRepo::list_active(&state.pool, &user.username).await?;
    Ok(Json(DataResponse { data: participants }))
}

/// GET /api/v1/participants/{id}
///
/// Point read, scoped by creator. Admins see everyone; `deltagare` callers
/// see only their own record.
pub async fn get_by_id(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Participant>>> {
    user.ensure_participant_access(id)?;

    let participant = if user.admin || user.participant_id == Some(id) {
        ParticipantRepo::find_by_id(&state.pool, id).await?
    } else {
        ParticipantRepo::find_for_creator(&state.pool, id, &user.username).await?
    };

    let participant = participant.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Participant",
        id,
    }))?;
    Ok(Json(DataResponse { data: participant }))
}

/// PUT /api/v1/participants/{id}/close
///
/// Close a participant: a one-way transition recording reason, actor, and
/// timestamp. Closing twice is a 409.
pub async fn close(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CloseParticipant>,
) -> AppResult<Json<DataResponse<Participant>>> {
    let reason = require_present(&input.reason, "reason")
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    match ParticipantRepo::close(&state.pool, id, reason, &user.username).await? {
        Some(participant) => {
            tracing::info!(
                participant_id = id,
                actor = %user.username,
                "Participant closed"
            );
            Ok(Json(DataResponse { data: participant }))
        }
        None if ParticipantRepo::exists(&state.pool, id).await? => Err(AppError::Core(
            CoreError::Conflict("Participant is already closed".into()),
        )),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Participant",
            id,
        })),
    }
}
