//! Route definitions for participant goals.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::goals;
use crate::state::AppState;

/// Routes mounted at `/participants/{id}/goals`.
///
/// ```text
/// PUT /                       -> save (upsert) the goal (staff)
/// GET /                       -> get the goal, null when unset
/// PUT /progress               -> update progress percentage (staff)
/// PUT /{goal_id}/complete     -> mark complete (staff)
/// ```
pub fn participant_router() -> Router<AppState> {
    Router::new()
        .route("/", put(goals::save).get(goals::get))
        .route("/progress", put(goals::update_progress))
        .route("/{goal_id}/complete", put(goals::complete))
}

/// Routes mounted at `/goals`.
///
/// ```text
/// GET /  -> all goals across participants (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(goals::list_all))
}
