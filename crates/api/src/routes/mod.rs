pub mod admin;
pub mod auth;
pub mod baseline;
pub mod documents;
pub mod follow_ups;
pub mod goals;
pub mod health;
pub mod insatser;
pub mod messages;
pub mod notes;
pub mod participants;
pub mod ratings;
pub mod selected_insatser;
pub mod statistics;
pub mod steps;
pub mod summaries;
pub mod tasks;
pub mod tips;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   create account (public)
/// /auth/login                                      login (public)
///
/// /participants                                    register, list own active (staff)
/// /participants/{id}                               get (scoped)
/// /participants/{id}/close                         close (PUT, one-way)
///
/// /participants/{id}/steps                         save, get current intake step
/// /participants/{id}/baseline                      save, get baseline scores
///
/// /participants/{id}/insatser                      select (POST), list
/// /participants/{id}/insatser/{insats_id}          one selection
/// /participants/{id}/insatser/{insats_id}/decision record decision (PUT)
/// /participants/{id}/insatser/{insats_id}/end      end insats (PUT, one-way)
///
/// /participants/{id}/goals                         save, get
/// /participants/{id}/goals/progress                update progress (PUT)
/// /participants/{id}/goals/{goal_id}/complete      mark complete (PUT)
///
/// /participants/{id}/tasks                         list for participant
/// /participants/{id}/ratings                       record, list history
/// /participants/{id}/ratings/latest                most recent rating
/// /participants/{id}/ratings/first                 earliest rating
/// /participants/{id}/notes                         add, list
/// /participants/{id}/notes/latest                  most recent note
/// /participants/{id}/messages                      send, read thread
/// /participants/{id}/messages/unread-count         unread count
/// /participants/{id}/documents                     upload (multipart), list
/// /participants/{id}/followups                     list for participant
/// /participants/{id}/summary                       save snapshot, latest
///
/// /insatser                                        catalog: create (multipart), list
/// /insatser/{id}                                   get, delete (admin)
/// /selected-insatser                               all selections (staff)
///
/// /steps                                           all step records (staff)
/// /goals                                           all goals (staff)
/// /tasks                                           create, list all (staff)
/// /tasks/{id}/complete                             mark complete (PUT)
/// /messages                                        all messages (staff)
///
/// /followups                                       book, list (?toEmail=) (staff)
/// /tips                                            add, list unexpired
/// /tips/{id}                                       delete (admin)
///
/// /statistics/participants                         filtered overview (staff)
/// /statistics/summary                              dashboard counts (staff)
///
/// /admin/users                                     list accounts (admin)
/// /admin/users/{id}                                get, update, delete
/// /admin/login-attempts                            login audit trail
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (register, login).
        .nest("/auth", auth::router())
        // Participant registry plus all per-participant sub-resources.
        .nest("/participants", participants::router())
        // Insats catalog.
        .nest("/insatser", insatser::router())
        // Cross-participant selection listing.
        .nest("/selected-insatser", selected_insatser::router())
        // Cross-participant listings for the staff dashboard.
        .nest("/steps", steps::router())
        .nest("/goals", goals::router())
        .nest("/tasks", tasks::router())
        .nest("/messages", messages::router())
        // Follow-up bookings.
        .nest("/followups", follow_ups::router())
        // Shared tips.
        .nest("/tips", tips::router())
        // Reporting.
        .nest("/statistics", statistics::router())
        // Account administration.
        .nest("/admin", admin::router())
}
