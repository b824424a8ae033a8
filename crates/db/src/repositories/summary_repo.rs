//! Repository for the `participant_summaries` table. Snapshots are
//! append-only; the latest one wins.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::summary::Summary;

/// Column list for participant_summaries queries.
const COLUMNS: &str = "id, participant_id, summary, created_at";

/// Provides summary-snapshot operations.
pub struct SummaryRepo;

impl SummaryRepo {
    /// Append a summary snapshot.
    pub async fn create(
        pool: &PgPool,
        participant_id: DbId,
        summary: &str,
    ) -> Result<Summary, sqlx::Error> {
        let query = format!(
            "INSERT INTO participant_summaries (participant_id, summary)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Summary>(&query)
            .bind(participant_id)
            .bind(summary)
            .fetch_one(pool)
            .await
    }

    /// The participant's most recent summary.
    pub async fn latest(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Option<Summary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM participant_summaries
             WHERE participant_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Summary>(&query)
            .bind(participant_id)
            .fetch_optional(pool)
            .await
    }
}
