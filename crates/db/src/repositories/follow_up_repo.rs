//! Repository for the `followups` table.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::follow_up::{CreateFollowUp, FollowUp};

/// Column list for followups queries.
const COLUMNS: &str = "\
    id, participant_id, from_name, from_email, to_email, subject, message, \
    date, start_time, end_time, location, created_by, created_at";

/// Provides follow-up meeting operations.
pub struct FollowUpRepo;

impl FollowUpRepo {
    /// Book a follow-up. The caller has already validated the required
    /// fields.
    pub async fn create(
        pool: &PgPool,
        participant_id: DbId,
        input: &CreateFollowUp,
        created_by: &str,
    ) -> Result<FollowUp, sqlx::Error> {
        let query = format!(
            "INSERT INTO followups (
                participant_id, from_name, from_email, to_email, subject,
                message, date, start_time, end_time, location, created_by
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FollowUp>(&query)
            .bind(participant_id)
            .bind(&input.from_name)
            .bind(&input.from_email)
            .bind(&input.to_email)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(input.date)
            .bind(&input.start_time)
            .bind(&input.end_time)
            .bind(&input.location)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// List every follow-up, soonest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<FollowUp>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM followups ORDER BY date ASC, start_time ASC");
        sqlx::query_as::<_, FollowUp>(&query).fetch_all(pool).await
    }

    /// List a participant's follow-ups, soonest first.
    pub async fn list_by_participant(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Vec<FollowUp>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM followups
             WHERE participant_id = $1
             ORDER BY date ASC, start_time ASC"
        );
        sqlx::query_as::<_, FollowUp>(&query)
            .bind(participant_id)
            .fetch_all(pool)
            .await
    }

    /// List follow-ups addressed to an email, soonest first.
    pub async fn list_by_email(
        pool: &PgPool,
        to_email: &str,
    ) -> Result<Vec<FollowUp>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM followups
             WHERE to_email = $1
             ORDER BY date ASC, start_time ASC"
        );
        sqlx::query_as::<_, FollowUp>(&query)
            .bind(to_email)
            .fetch_all(pool)
            .await
    }
}
