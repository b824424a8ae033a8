//! Repository for the `login_attempts` audit table.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::login_attempt::LoginAttempt;

/// Column list for login_attempts queries.
const COLUMNS: &str = "id, username, success, attempted_at, participant_id, created_by";

/// Provides the login audit trail. One row per attempt, success or not.
pub struct LoginAttemptRepo;

impl LoginAttemptRepo {
    /// Record a login attempt.
    pub async fn record(
        pool: &PgPool,
        username: &str,
        success: bool,
        participant_id: Option<DbId>,
        created_by: Option<&str>,
    ) -> Result<LoginAttempt, sqlx::Error> {
        let query = format!(
            "INSERT INTO login_attempts (username, success, participant_id, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LoginAttempt>(&query)
            .bind(username)
            .bind(success)
            .bind(participant_id)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// List the most recent attempts, newest first.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<LoginAttempt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM login_attempts
             ORDER BY attempted_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, LoginAttempt>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
