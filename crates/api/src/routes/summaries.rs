//! Route definitions for participant summary snapshots.

use axum::routing::post;
use axum::Router;

use crate::handlers::summaries;
use crate::state::AppState;

/// Routes mounted at `/participants/{id}/summary`.
///
/// ```text
/// POST /  -> save a new snapshot (staff)
/// GET  /  -> latest snapshot, null when none
/// ```
pub fn participant_router() -> Router<AppState> {
    Router::new().route("/", post(summaries::save).get(summaries::latest))
}
