//! Repository for the `user_steps` table.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::step::StepProgress;

/// Column list for user_steps queries.
const COLUMNS: &str = "participant_id, step, username, created_at, updated_at";

/// Provides step-progress operations. One row per participant, last write
/// wins.
pub struct StepRepo;

impl StepRepo {
    /// Save a participant's current step, overwriting any previous value.
    pub async fn upsert(
        pool: &PgPool,
        participant_id: DbId,
        step: i32,
        username: &str,
    ) -> Result<StepProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_steps (participant_id, step, username)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_user_steps_participant
             DO UPDATE SET step = EXCLUDED.step,
                           username = EXCLUDED.username,
                           updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StepProgress>(&query)
            .bind(participant_id)
            .bind(step)
            .bind(username)
            .fetch_one(pool)
            .await
    }

    /// Find a participant's current step, if any was ever saved.
    pub async fn find_by_participant(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Option<StepProgress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_steps WHERE participant_id = $1");
        sqlx::query_as::<_, StepProgress>(&query)
            .bind(participant_id)
            .fetch_optional(pool)
            .await
    }

    /// List the current step of every participant.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<StepProgress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_steps ORDER BY participant_id ASC");
        sqlx::query_as::<_, StepProgress>(&query)
            .fetch_all(pool)
            .await
    }
}
