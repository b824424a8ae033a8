//! Route definitions for the `/participants` resource and its nested
//! per-participant sub-resources.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::participants;
use crate::routes::{
    baseline, documents, follow_ups, goals, messages, notes, ratings, selected_insatser, steps,
    summaries, tasks,
};
use crate::state::AppState;

/// Routes mounted at `/participants`.
///
/// ```text
/// POST /                       -> register participant (staff)
/// GET  /                       -> list own active participants (staff)
/// GET  /{id}                   -> get participant
/// PUT  /{id}/close             -> close participant
/// .../{id}/steps               -> intake step (see steps)
/// .../{id}/baseline            -> baseline scores (see baseline)
/// .../{id}/insatser            -> selected insatser (see selected_insatser)
/// .../{id}/goals               -> goals (see goals)
/// .../{id}/tasks               -> tasks (see tasks)
/// .../{id}/ratings             -> assessment ratings (see ratings)
/// .../{id}/notes               -> notes (see notes)
/// .../{id}/messages            -> chat (see messages)
/// .../{id}/documents           -> documents (see documents)
/// .../{id}/followups           -> follow-ups (see follow_ups)
/// .../{id}/summary             -> summary snapshots (see summaries)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(participants::register).get(participants::list_active),
        )
        .route("/{id}", get(participants::get_by_id))
        .route("/{id}/close", put(participants::close))
        .nest("/{id}/steps", steps::participant_router())
        .nest("/{id}/baseline", baseline::participant_router())
        .nest("/{id}/insatser", selected_insatser::participant_router())
        .nest("/{id}/goals", goals::participant_router())
        .nest("/{id}/tasks", tasks::participant_router())
        .nest("/{id}/ratings", ratings::participant_router())
        .nest("/{id}/notes", notes::participant_router())
        .nest("/{id}/messages", messages::participant_router())
        .nest("/{id}/documents", documents::participant_router())
        .nest("/{id}/followups", follow_ups::participant_router())
        .nest("/{id}/summary", summaries::participant_router())
}
