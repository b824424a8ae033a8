//! Route definitions for follow-up meetings.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::follow_ups;
use crate::state::AppState;

/// Routes mounted at `/followups`.
///
/// ```text
/// POST /               -> book a follow-up (staff)
/// GET  /[?toEmail=..]  -> all follow-ups, optionally by recipient (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(follow_ups::create).get(follow_ups::list))
}

/// Routes mounted at `/participants/{id}/followups`.
///
/// ```text
/// GET /  -> follow-ups for the participant
/// ```
pub fn participant_router() -> Router<AppState> {
    Router::new().route("/", get(follow_ups::list_by_participant))
}
