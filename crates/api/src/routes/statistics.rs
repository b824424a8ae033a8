//! Route definitions for the reporting endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::statistics;
use crate::state::AppState;

/// Routes mounted at `/statistics`.
///
/// ```text
/// GET /participants   -> overview with date/status filters (staff)
/// GET /summary        -> dashboard counts and per-step breakdown (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/participants", get(statistics::participants))
        .route("/summary", get(statistics::summary))
}
