//! Repository for the `notes` table. Notes are append-only.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::Note;

/// Column list for notes queries.
const COLUMNS: &str = "id, participant_id, author, content, date";

/// Provides case-note operations.
pub struct NoteRepo;

impl NoteRepo {
    /// Append a note to a participant's record.
    pub async fn create(
        pool: &PgPool,
        participant_id: DbId,
        author: &str,
        content: &str,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (participant_id, author, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(participant_id)
            .bind(author)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// List a participant's notes, newest first.
    pub async fn list_by_participant(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE participant_id = $1
             ORDER BY date DESC, id DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(participant_id)
            .fetch_all(pool)
            .await
    }

    /// The participant's most recent note.
    pub async fn latest(pool: &PgPool, participant_id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE participant_id = $1
             ORDER BY date DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(participant_id)
            .fetch_optional(pool)
            .await
    }
}
