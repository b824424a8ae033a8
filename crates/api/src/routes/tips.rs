//! Route definitions for shared tips.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::tips;
use crate::state::AppState;

/// Routes mounted at `/tips`.
///
/// ```text
/// POST   /       -> add a tip (staff)
/// GET    /       -> unexpired tips
/// DELETE /{id}   -> remove a tip (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(tips::create).get(tips::list_active))
        .route("/{id}", delete(tips::delete))
}
