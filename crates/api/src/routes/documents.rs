//! Route definitions for participant documents.

use axum::routing::post;
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

/// Routes mounted at `/participants/{id}/documents`.
///
/// ```text
/// POST /  -> upload a document (multipart)
/// GET  /  -> list documents
/// ```
pub fn participant_router() -> Router<AppState> {
    Router::new().route("/", post(documents::upload).get(documents::list))
}
