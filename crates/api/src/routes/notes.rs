//! Route definitions for participant notes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Routes mounted at `/participants/{id}/notes`.
///
/// ```text
/// POST /         -> add a note (staff)
/// GET  /         -> notes, newest first
/// GET  /latest   -> most recent note
/// ```
pub fn participant_router() -> Router<AppState> {
    Router::new()
        .route("/", post(notes::create).get(notes::list))
        .route("/latest", get(notes::latest))
}
