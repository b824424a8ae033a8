//! Repository for the `ratings` table. Rows are append-only snapshots.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::rating::{Rating, RatingScores};

/// Column list for ratings queries.
const COLUMNS: &str = "\
    id, participant_id, hantering_av_vardagen, halsa, koncentrationsformaga, \
    tro_pa_att_fa_jobb, stod_fran_natverk, samarbetsformaga, \
    jobbsokningsbeteende, kunskap_om_arbetsmarknaden, malmedvetenhet, \
    created_at";

/// Provides assessment-snapshot operations.
pub struct RatingRepo;

impl RatingRepo {
    /// Record a new assessment snapshot.
    pub async fn create(
        pool: &PgPool,
        participant_id: DbId,
        scores: &RatingScores,
    ) -> Result<Rating, sqlx::Error> {
        let query = format!(
            "INSERT INTO ratings (
                participant_id, hantering_av_vardagen, halsa,
                koncentrationsformaga, tro_pa_att_fa_jobb, stod_fran_natverk,
                samarbetsformaga, jobbsokningsbeteende,
                kunskap_om_arbetsmarknaden, malmedvetenhet
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(participant_id)
            .bind(scores.hantering_av_vardagen)
            .bind(scores.halsa)
            .bind(scores.koncentrationsformaga)
            .bind(scores.tro_pa_att_fa_jobb)
            .bind(scores.stod_fran_natverk)
            .bind(scores.samarbetsformaga)
            .bind(scores.jobbsokningsbeteende)
            .bind(scores.kunskap_om_arbetsmarknaden)
            .bind(scores.malmedvetenhet)
            .fetch_one(pool)
            .await
    }

    /// List a participant's snapshots in chronological order, ties broken
    /// by id.
    pub async fn list_by_participant(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Vec<Rating>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ratings
             WHERE participant_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(participant_id)
            .fetch_all(pool)
            .await
    }

    /// The participant's most recent snapshot.
    pub async fn latest(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Option<Rating>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ratings
             WHERE participant_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(participant_id)
            .fetch_optional(pool)
            .await
    }

    /// The participant's first snapshot.
    pub async fn first(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Option<Rating>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ratings
             WHERE participant_id = $1
             ORDER BY created_at ASC, id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(participant_id)
            .fetch_optional(pool)
            .await
    }
}
