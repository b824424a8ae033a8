//! Route definitions for selected insatser and their decisions.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::selected_insatser;
use crate::state::AppState;

/// Routes mounted at `/participants/{id}/insatser`.
///
/// ```text
/// POST /                        -> select catalog entries (staff, all-or-nothing)
/// GET  /                        -> list selections for the participant
/// GET  /{insats_id}             -> one selection
/// PUT  /{insats_id}/decision    -> record or update the decision (staff)
/// PUT  /{insats_id}/end         -> end the insats (staff, one-way)
/// ```
pub fn participant_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(selected_insatser::select).get(selected_insatser::list_by_participant),
        )
        .route("/{insats_id}", get(selected_insatser::get_by_pair))
        .route(
            "/{insats_id}/decision",
            put(selected_insatser::record_decision),
        )
        .route("/{insats_id}/end", put(selected_insatser::end))
}

/// Routes mounted at `/selected-insatser`.
///
/// ```text
/// GET /  -> all selections across participants (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(selected_insatser::list_all))
}
