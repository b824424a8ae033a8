//! Route definitions for assessment ratings.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ratings;
use crate::state::AppState;

/// Routes mounted at `/participants/{id}/ratings`.
///
/// ```text
/// POST /         -> record a rating (staff)
/// GET  /         -> rating history, oldest first
/// GET  /latest   -> most recent rating
/// GET  /first    -> earliest rating
/// ```
pub fn participant_router() -> Router<AppState> {
    Router::new()
        .route("/", post(ratings::create).get(ratings::list))
        .route("/latest", get(ratings::latest))
        .route("/first", get(ratings::first))
}
