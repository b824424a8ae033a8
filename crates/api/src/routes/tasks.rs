//! Route definitions for participant tasks.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// POST /                -> create a task (staff, participantId in body)
/// GET  /                -> all tasks across participants (staff)
/// PUT  /{id}/complete   -> mark complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(tasks::create).get(tasks::list_all))
        .route("/{id}/complete", put(tasks::complete))
}

/// Routes mounted at `/participants/{id}/tasks`.
///
/// ```text
/// GET /  -> tasks for the participant
/// ```
pub fn participant_router() -> Router<AppState> {
    Router::new().route("/", get(tasks::list_by_participant))
}
