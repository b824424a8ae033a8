//! Handlers for assessment snapshots (ratings).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::ratings::validate_score;
use kompass_core::types::DbId;
use kompass_db::models::rating::{CreateRating, Rating, RatingScores};
use kompass_db::repositories::RatingRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Validate all nine scores, naming the first missing or out-of-range one.
fn validate_scores(input: &CreateRating) -> Result<RatingScores, CoreError> {
    let check = |dimension: &str, value: Option<i32>| {
        validate_score(dimension, value).map_err(CoreError::Validation)
    };

    Ok(RatingScores {
        hantering_av_vardagen: check("hantering_av_vardagen", input.hantering_av_vardagen)?,
        halsa: check("halsa", input.halsa)?,
        koncentrationsformaga: check("koncentrationsformaga", input.koncentrationsformaga)?,
        tro_pa_att_fa_jobb: check("tro_pa_att_fa_jobb", input.tro_pa_att_fa_jobb)?,
        stod_fran_natverk: check("stod_fran_natverk", input.stod_fran_natverk)?,
        samarbetsformaga: check("samarbetsformaga", input.samarbetsformaga)?,
        jobbsokningsbeteende: check("jobbsokningsbeteende", input.jobbsokningsbeteende)?,
        kunskap_om_arbetsmarknaden: check(
            "kunskap_om_arbetsmarknaden",
            input.kunskap_om_arbetsmarknaden,
        )?,
        malmedvetenhet: check("malmedvetenhet", input.malmedvetenhet)?,
    })
}

/// POST /api/v1/participants/{id}/ratings
///
/// Record an immutable snapshot of all nine scores.
pub async fn create(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
    Json(input): Json<CreateRating>,
) -> AppResult<(StatusCode, Json<DataResponse<Rating>>)> {
    let scores = validate_scores(&input)?;

    let rating = RatingRepo::create(&state.pool, participant_id, &scores).await?;
    tracing::info!(participant_id, actor = %user.username, "Rating recorded");

    Ok((StatusCode::CREATED, Json(DataResponse { data: rating })))
}

/// GET /api/v1/participants/{id}/ratings
///
/// The full series in chronological order.
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Rating>>>> {
    user.ensure_participant_access(participant_id)?;
    let ratings = RatingRepo::list_by_participant(&state.pool, participant_id).await?;
    Ok(Json(DataResponse { data: ratings }))
}

/// GET /api/v1/participants/{id}/ratings/latest
///
/// `null` when the series is empty.
pub async fn latest(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Option<Rating>>>> {
    user.ensure_participant_access(participant_id)?;
    let rating = RatingRepo::latest(&state.pool, participant_id).await?;
    Ok(Json(DataResponse { data: rating }))
}

/// GET /api/v1/participants/{id}/ratings/first
pub async fn first(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Option<Rating>>>> {
    user.ensure_participant_access(participant_id)?;
    let rating = RatingRepo::first(&state.pool, participant_id).await?;
    Ok(Json(DataResponse { data: rating }))
}
