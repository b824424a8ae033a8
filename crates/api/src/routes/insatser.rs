//! Route definitions for the insats catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::insatser;
use crate::state::AppState;

/// Routes mounted at `/insatser`.
///
/// ```text
/// POST   /       -> create catalog entry with attachments (staff, multipart)
/// GET    /       -> list catalog
/// GET    /{id}   -> get catalog entry
/// DELETE /{id}   -> delete catalog entry (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(insatser::create).get(insatser::list))
        .route("/{id}", get(insatser::get_by_id).delete(insatser::delete))
}
