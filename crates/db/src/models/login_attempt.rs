//! Login attempt audit model.

use kompass_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `login_attempts` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LoginAttempt {
    pub id: DbId,
    pub username: String,
    pub success: bool,
    pub attempted_at: Timestamp,
    pub participant_id: Option<DbId>,
    pub created_by: Option<String>,
}
