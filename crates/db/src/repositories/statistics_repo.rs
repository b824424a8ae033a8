//! Read-only reporting queries across participants and steps.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::statistics::{ParticipantOverview, StepCount, SummaryCounts};

/// Provides statistics queries. Filtering uses nullable binds so the SQL
/// stays static.
pub struct StatisticsRepo;

impl StatisticsRepo {
    /// Participants joined with their current intake step, newest first.
    ///
    /// `avslutad` filters by closure status when set; the date range
    /// filters on the registration date.
    pub async fn participant_overview(
        pool: &PgPool,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        avslutad: Option<bool>,
    ) -> Result<Vec<ParticipantOverview>, sqlx::Error> {
        let sql = "\
            SELECT p.id, p.first_name, p.last_name, p.created_by, \
                   p.created_at, p.avslutad, p.avslutad_datum, \
                   COALESCE(s.step, 0) AS step \
            FROM participants p \
            LEFT JOIN user_steps s ON s.participant_id = p.id \
            WHERE ($1::DATE IS NULL OR p.created_at::date >= $1) \
              AND ($2::DATE IS NULL OR p.created_at::date <= $2) \
              AND ($3::BOOLEAN IS NULL OR p.avslutad = $3) \
            ORDER BY p.created_at DESC";
        sqlx::query_as::<_, ParticipantOverview>(sql)
            .bind(start_date)
            .bind(end_date)
            .bind(avslutad)
            .fetch_all(pool)
            .await
    }

    /// Total, active, and closed participant counts.
    pub async fn summary_counts(pool: &PgPool) -> Result<SummaryCounts, sqlx::Error> {
        let sql = "\
            SELECT COUNT(*) AS total, \
                   COUNT(*) FILTER (WHERE NOT avslutad) AS active, \
                   COUNT(*) FILTER (WHERE avslutad) AS closed \
            FROM participants";
        sqlx::query_as::<_, SummaryCounts>(sql).fetch_one(pool).await
    }

    /// Participant counts per intake step.
    pub async fn step_counts(pool: &PgPool) -> Result<Vec<StepCount>, sqlx::Error> {
        let sql = "\
            SELECT step, COUNT(*) AS count \
            FROM user_steps \
            GROUP BY step \
            ORDER BY step ASC";
        sqlx::query_as::<_, StepCount>(sql).fetch_all(pool).await
    }
}
