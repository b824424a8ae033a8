//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/admin` (all require the admin flag).
///
/// ```text
/// GET    /users               -> list accounts
/// GET    /users/{id}          -> get account
/// PUT    /users/{id}          -> update account
/// DELETE /users/{id}          -> delete account
/// GET    /login-attempts      -> login audit trail (?limit=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list))
        .route(
            "/users/{id}",
            get(users::get_by_id)
                .put(users::update)
                .delete(users::delete),
        )
        .route("/login-attempts", get(users::login_attempts))
}
