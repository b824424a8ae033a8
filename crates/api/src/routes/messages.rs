//! Route definitions for the participant chat.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/participants/{id}/messages`.
///
/// ```text
/// POST /                -> send a message
/// GET  /                -> thread, oldest first; marks messages read
/// GET  /unread-count    -> unread message count
/// ```
pub fn participant_router() -> Router<AppState> {
    Router::new()
        .route("/", post(messages::send).get(messages::list))
        .route("/unread-count", get(messages::unread_count))
}

/// Routes mounted at `/messages`.
///
/// ```text
/// GET /  -> all messages across participants (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(messages::list_all))
}
