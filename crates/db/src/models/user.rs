//! Account model: case workers, admins, and participant-linked accounts.

use kompass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table. The password hash never leaves the
/// backend; use [`PublicUser`] for responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub admin: bool,
    pub participant_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// Public projection of a user, safe to serialize into responses.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PublicUser {
    pub id: DbId,
    pub email: String,
    pub username: String,
    pub role: String,
    pub admin: bool,
    pub participant_id: Option<DbId>,
    pub created_at: Timestamp,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            username: u.username,
            role: u.role,
            admin: u.admin,
            participant_id: u.participant_id,
            created_at: u.created_at,
        }
    }
}

/// Validated fields for inserting a user; the handler has already hashed
/// the password and checked the role.
#[derive(Debug)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub participant_id: Option<DbId>,
}

/// DTO for the admin user update endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub username: Option<String>,
    pub role: Option<String>,
    pub admin: Option<bool>,
}
