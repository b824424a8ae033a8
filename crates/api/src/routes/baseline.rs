//! Route definitions for grundförutsättningar baseline scores.

use axum::routing::get;
use axum::Router;

use crate::handlers::baseline;
use crate::state::AppState;

/// Routes mounted at `/participants/{id}/baseline`.
///
/// ```text
/// PUT /  -> save baseline scores (staff)
/// GET /  -> get baseline scores (zeroed defaults when unset)
/// ```
pub fn participant_router() -> Router<AppState> {
    Router::new().route("/", get(baseline::get).put(baseline::save))
}
