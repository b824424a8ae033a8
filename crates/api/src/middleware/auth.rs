//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use kompass_core::error::CoreError;
use kompass_core::roles::ROLE_DELTAGARE;
use kompass_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's username, recorded as actor on writes.
    pub username: String,
    /// The user's role name (e.g. `"user"`, `"deltagare"`).
    pub role: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    /// The linked participant id, set for `deltagare` accounts.
    pub participant_id: Option<DbId>,
}

impl AuthUser {
    /// Enforce the participant-scoping rule: `deltagare` accounts may only
    /// touch their own participant record. Staff and admins pass through.
    pub fn ensure_participant_access(&self, participant_id: DbId) -> Result<(), AppError> {
        if self.role == ROLE_DELTAGARE && self.participant_id != Some(participant_id) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Access restricted to your own participant record".into(),
            )));
        }
        Ok(())
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            username: claims.username,
            role: claims.role,
            admin: claims.admin,
            participant_id: claims.participant_id,
        })
    }
}
