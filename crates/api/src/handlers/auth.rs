//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::roles::{validate_role, ROLE_DELTAGARE, ROLE_USER};
use kompass_core::types::DbId;
use kompass_db::models::user::{NewUser, PublicUser};
use kompass_db::repositories::{LoginAttemptRepo, ParticipantRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, TokenSubject};
use crate::auth::password::{
    hash_password, validate_password_strength, validate_username, verify_password,
};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Defaults to `user` when omitted.
    pub role: Option<String>,
    /// Participant link, only meaningful for `deltagare` accounts.
    pub participant_id: Option<DbId>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: PublicUser,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account. Role defaults to `user`; `deltagare` accounts may
/// carry a participant link. Duplicate email or username is a 409.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<PublicUser>>)> {
    let email = kompass_core::validation::require_present(&input.email, "email")
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    let username = kompass_core::validation::require_present(&input.username, "username")
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    let password = kompass_core::validation::require_present(&input.password, "password")
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    validate_username(username).map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    validate_password_strength(password).map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let role = input.role.as_deref().unwrap_or(ROLE_USER);
    validate_role(role).map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    // Only participant-linked accounts carry a participant id, and the
    // linked participant must exist before the account does.
    let participant_id = if role == ROLE_DELTAGARE {
        if let Some(pid) = input.participant_id {
            if !ParticipantRepo::exists(&state.pool, pid).await? {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Participant",
                    id: pid,
                }));
            }
        }
        input.participant_id
    } else {
        None
    };

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let new_user = NewUser {
        email: email.to_string(),
        username: username.to_string(),
        password_hash,
        role: role.to_string(),
        participant_id,
    };
    let user = UserRepo::create(&state.pool, &new_user).await?;

    tracing::info!(user_id = user.id, username = %user.username, "Account registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: user.into() }),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Every attempt, successful or not,
/// is appended to the login audit trail.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = match UserRepo::find_by_email(&state.pool, &input.email).await? {
        Some(user) => user,
        None => {
            LoginAttemptRepo::record(&state.pool, &input.email, false, None, None).await?;
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid email or password".into(),
            )));
        }
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    LoginAttemptRepo::record(
        &state.pool,
        &user.username,
        password_valid,
        user.participant_id,
        Some(&user.username),
    )
    .await?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let subject = TokenSubject {
        user_id: user.id,
        username: &user.username,
        role: &user.role,
        admin: user.admin,
        participant_id: user.participant_id,
    };
    let access_token = generate_access_token(&subject, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, username = %user.username, "Login succeeded");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: user.into(),
    }))
}
