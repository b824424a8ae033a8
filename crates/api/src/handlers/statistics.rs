//! Handlers for the reporting endpoints.

use axum::extract::{Query, State};
use axum::Json;
use kompass_core::error::CoreError;
use kompass_db::models::participant::ParticipantFilters;
use kompass_db::models::statistics::{ParticipantOverview, StepCount, SummaryCounts};
use kompass_db::repositories::StatisticsRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Combined dashboard payload.
#[derive(Debug, Serialize)]
pub struct StatisticsSummary {
    pub total: i64,
    pub active: i64,
    pub closed: i64,
    pub per_step: Vec<StepCount>,
}

fn parse_status(status: Option<&str>) -> Result<Option<bool>, AppError> {
    match status {
        None | Some("") => Ok(None),
        Some("avslutad") => Ok(Some(true)),
        Some("pågående") => Ok(Some(false)),
        Some(other) => Err(AppError::Core(CoreError::Validation(format!(
            "Invalid status '{other}'. Must be 'avslutad' or 'pågående'"
        )))),
    }
}

/// GET /api/v1/statistics/participants
pub async fn participants(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Query(filters): Query<ParticipantFilters>,
) -> AppResult<Json<DataResponse<Vec<ParticipantOverview>>>> {
    let avslutad = parse_status(filters.status.as_deref())?;
    let overview = StatisticsRepo::participant_overview(
        &state.pool,
        filters.start_date,
        filters.end_date,
        avslutad,
    )
    .await?;
    Ok(Json(DataResponse { data: overview }))
}

/// GET /api/v1/statistics/summary
pub async fn summary(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<StatisticsSummary>>> {
    let SummaryCounts {
        total,
        active,
        closed,
    } = StatisticsRepo::summary_counts(&state.pool).await?;
    let per_step = StatisticsRepo::step_counts(&state.pool).await?;
    Ok(Json(DataResponse {
        data: StatisticsSummary {
            total,
            active,
            closed,
            per_step,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_closure_flag() {
        assert_eq!(parse_status(Some("avslutad")).unwrap(), Some(true));
        assert_eq!(parse_status(Some("pågående")).unwrap(), Some(false));
        assert_eq!(parse_status(None).unwrap(), None);
    }

    #[test]
    fn unknown_status_rejected() {
        assert!(parse_status(Some("klar")).is_err());
    }
}
