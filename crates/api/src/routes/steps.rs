//! Route definitions for intake steps.

use axum::routing::get;
use axum::Router;

use crate::handlers::steps;
use crate::state::AppState;

/// Routes mounted at `/participants/{id}/steps`.
///
/// ```text
/// PUT /  -> save current step (staff)
/// GET /  -> get current step (0 when not started)
/// ```
pub fn participant_router() -> Router<AppState> {
    Router::new().route("/", get(steps::get).put(steps::save))
}

/// Routes mounted at `/steps`.
///
/// ```text
/// GET /  -> all step records (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(steps::list_all))
}
