//! Repository for the `documents` table. Bytes live in the file store;
//! only metadata is persisted here.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::document::Document;

/// Column list for documents queries.
const COLUMNS: &str = "id, participant_id, file_name, file_path, uploaded_at";

/// Provides document-metadata operations.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Record an uploaded document.
    pub async fn create(
        pool: &PgPool,
        participant_id: DbId,
        file_name: &str,
        file_path: &str,
    ) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (participant_id, file_name, file_path)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(participant_id)
            .bind(file_name)
            .bind(file_path)
            .fetch_one(pool)
            .await
    }

    /// List a participant's documents, newest first.
    pub async fn list_by_participant(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents
             WHERE participant_id = $1
             ORDER BY uploaded_at DESC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(participant_id)
            .fetch_all(pool)
            .await
    }
}
