//! Repository for the `selected_insatser` table: selections and decisions.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::selected_insats::{RecordDecision, SelectedInsats};

/// Column list for selected_insatser queries.
const COLUMNS: &str = "\
    id, participant_id, insats_id, step, name, focus_type, description, \
    combine_with, start_date, end_date, last_date, responsible, bestallare, \
    insats, beslut, kategori, executor, workplace, ansvarig, handledare, \
    telefon, avslutad_status, avslutningsdatum, created_at";

/// Provides selection and decision operations on (participant, insats)
/// pairs.
pub struct SelectedInsatsRepo;

impl SelectedInsatsRepo {
    /// Select a batch of catalog templates for a participant at a step.
    ///
    /// Runs in one transaction, all-or-nothing: a catalog id with no
    /// matching template makes the insert return zero rows, which surfaces
    /// as [`sqlx::Error::RowNotFound`] and rolls the whole batch back.
    /// Re-selecting an already-selected insats updates its step in place.
    pub async fn select_for_participant(
        pool: &PgPool,
        participant_id: DbId,
        step: i32,
        insats_ids: &[DbId],
    ) -> Result<Vec<SelectedInsats>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut selected = Vec::with_capacity(insats_ids.len());

        let query = format!(
            "INSERT INTO selected_insatser (
                participant_id, insats_id, step, name, focus_type,
                description, combine_with, start_date, end_date, last_date,
                responsible
             )
             SELECT $1, id, $3, name, focus_type, description, combine_with,
                    start_date, end_date, last_date, responsible
             FROM insatser WHERE id = $2
             ON CONFLICT ON CONSTRAINT uq_selected_insatser_pair
             DO UPDATE SET step = EXCLUDED.step
             RETURNING {COLUMNS}"
        );
        for insats_id in insats_ids {
            let row = sqlx::query_as::<_, SelectedInsats>(&query)
                .bind(participant_id)
                .bind(insats_id)
                .bind(step)
                .fetch_one(&mut *tx)
                .await?;
            selected.push(row);
        }

        tx.commit().await?;
        Ok(selected)
    }

    /// List a participant's selections, newest first.
    pub async fn list_by_participant(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Vec<SelectedInsats>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM selected_insatser
             WHERE participant_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, SelectedInsats>(&query)
            .bind(participant_id)
            .fetch_all(pool)
            .await
    }

    /// List every selection across all participants.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SelectedInsats>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM selected_insatser ORDER BY created_at DESC");
        sqlx::query_as::<_, SelectedInsats>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find the selection row for a (participant, insats) pair.
    pub async fn find_by_pair(
        pool: &PgPool,
        participant_id: DbId,
        insats_id: DbId,
    ) -> Result<Option<SelectedInsats>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM selected_insatser
             WHERE participant_id = $1 AND insats_id = $2"
        );
        sqlx::query_as::<_, SelectedInsats>(&query)
            .bind(participant_id)
            .bind(insats_id)
            .fetch_optional(pool)
            .await
    }

    /// Record (or overwrite) the decision for a (participant, insats) pair.
    ///
    /// One upsert keyed on the unique pair: if the participant never
    /// selected the insats, the row is created from the catalog template;
    /// an unknown catalog id surfaces as [`sqlx::Error::RowNotFound`].
    pub async fn record_decision(
        pool: &PgPool,
        participant_id: DbId,
        insats_id: DbId,
        input: &RecordDecision,
    ) -> Result<SelectedInsats, sqlx::Error> {
        let query = format!(
            "INSERT INTO selected_insatser (
                participant_id, insats_id, name, focus_type, description,
                combine_with, responsible, bestallare, insats, beslut,
                kategori, start_date, end_date, executor, workplace,
                ansvarig, handledare, telefon
             )
             SELECT $1, id, name, focus_type, description, combine_with,
                    responsible, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13
             FROM insatser WHERE id = $2
             ON CONFLICT ON CONSTRAINT uq_selected_insatser_pair
             DO UPDATE SET bestallare = EXCLUDED.bestallare,
                           insats = EXCLUDED.insats,
                           beslut = EXCLUDED.beslut,
                           kategori = EXCLUDED.kategori,
                           start_date = EXCLUDED.start_date,
                           end_date = EXCLUDED.end_date,
                           executor = EXCLUDED.executor,
                           workplace = EXCLUDED.workplace,
                           ansvarig = EXCLUDED.ansvarig,
                           handledare = EXCLUDED.handledare,
                           telefon = EXCLUDED.telefon
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SelectedInsats>(&query)
            .bind(participant_id)
            .bind(insats_id)
            .bind(&input.bestallare)
            .bind(&input.insats)
            .bind(&input.beslut)
            .bind(&input.kategori)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.executor)
            .bind(&input.workplace)
            .bind(&input.ansvarig)
            .bind(&input.handledare)
            .bind(&input.telefon)
            .fetch_one(pool)
            .await
    }

    /// End an insats for a participant in one guarded update.
    ///
    /// The `avslutad_status IS NULL` guard makes ending a one-way
    /// transition: `None` means the pair is missing or already ended,
    /// which the caller disambiguates with
    /// [`SelectedInsatsRepo::pair_exists`].
    pub async fn end_insats(
        pool: &PgPool,
        participant_id: DbId,
        insats_id: DbId,
        ending_status: &str,
    ) -> Result<Option<SelectedInsats>, sqlx::Error> {
        let query = format!(
            "UPDATE selected_insatser SET
                avslutad_status = $3,
                avslutningsdatum = NOW()
             WHERE participant_id = $1 AND insats_id = $2
               AND avslutad_status IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SelectedInsats>(&query)
            .bind(participant_id)
            .bind(insats_id)
            .bind(ending_status)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a (participant, insats) selection row exists.
    pub async fn pair_exists(
        pool: &PgPool,
        participant_id: DbId,
        insats_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM selected_insatser
                 WHERE participant_id = $1 AND insats_id = $2
             )",
        )
        .bind(participant_id)
        .bind(insats_id)
        .fetch_one(pool)
        .await
    }
}
