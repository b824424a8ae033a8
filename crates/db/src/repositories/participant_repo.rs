//! Repository for the `participants` table.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::participant::{NewParticipant, Participant};

/// Column list for participants queries.
const COLUMNS: &str = "\
    id, first_name, last_name, gender, education, license, personal_number, \
    address, postal_code, city, phone_number, unemployment_time, initiated_by, \
    created_by, created_at, avslutad, avslutsorsak, avslutad_av, avslutad_datum";

/// Provides CRUD operations for participants.
pub struct ParticipantRepo;

impl ParticipantRepo {
    /// Register a new participant, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewParticipant,
        created_by: &str,
    ) -> Result<Participant, sqlx::Error> {
        let query = format!(
            "INSERT INTO participants (
                first_name, last_name, gender, education, license,
                personal_number, address, postal_code, city, phone_number,
                unemployment_time, initiated_by, created_by
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.gender)
            .bind(&input.education)
            .bind(&input.license)
            .bind(&input.personal_number)
            .bind(&input.address)
            .bind(&input.postal_code)
            .bind(&input.city)
            .bind(&input.phone_number)
            .bind(&input.unemployment_time)
            .bind(&input.initiated_by)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// List a case worker's active (not closed) participants, newest first.
    pub async fn list_active(
        pool: &PgPool,
        created_by: &str,
    ) -> Result<Vec<Participant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM participants
             WHERE created_by = $1 AND avslutad = FALSE
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(created_by)
            .fetch_all(pool)
            .await
    }

    /// Find a participant by ID, regardless of creator.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM participants WHERE id = $1");
        sqlx::query_as::<_, Participant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a participant by ID, scoped to its creator.
    pub async fn find_for_creator(
        pool: &PgPool,
        id: DbId,
        created_by: &str,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM participants WHERE id = $1 AND created_by = $2");
        sqlx::query_as::<_, Participant>(&query)
            .bind(id)
            .bind(created_by)
            .fetch_optional(pool)
            .await
    }

    /// Close (avsluta) a participant in one atomic update.
    ///
    /// The `avslutad = FALSE` guard makes closure a one-way transition:
    /// `None` means the participant is either missing or already closed,
    /// which the caller disambiguates with [`ParticipantRepo::exists`].
    pub async fn close(
        pool: &PgPool,
        id: DbId,
        reason: &str,
        closed_by: &str,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!(
            "UPDATE participants SET
                avslutad = TRUE,
                avslutsorsak = $2,
                avslutad_av = $3,
                avslutad_datum = NOW()
             WHERE id = $1 AND avslutad = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(id)
            .bind(reason)
            .bind(closed_by)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a participant row exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM participants WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
