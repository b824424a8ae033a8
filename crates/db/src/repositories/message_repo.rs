//! Repository for the `messages` table.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::message::Message;

/// Column list for messages queries.
const COLUMNS: &str = "id, participant_id, sender, text, read_status, sent_at";

/// Provides chat-message operations.
pub struct MessageRepo;

impl MessageRepo {
    /// Send a message. New messages start unread.
    pub async fn create(
        pool: &PgPool,
        participant_id: DbId,
        sender: &str,
        text: &str,
    ) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (participant_id, sender, text)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(participant_id)
            .bind(sender)
            .bind(text)
            .fetch_one(pool)
            .await
    }

    /// List a participant's thread in chronological order, marking every
    /// unread message read in the same transaction. Opening the thread is
    /// what counts as reading it.
    pub async fn list_and_mark_read(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Vec<Message>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE messages SET read_status = TRUE
             WHERE participant_id = $1 AND read_status = FALSE",
        )
        .bind(participant_id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM messages
             WHERE participant_id = $1
             ORDER BY sent_at ASC, id ASC"
        );
        let messages = sqlx::query_as::<_, Message>(&query)
            .bind(participant_id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(messages)
    }

    /// List every message across all participants. No read-status side
    /// effect.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages ORDER BY sent_at ASC, id ASC");
        sqlx::query_as::<_, Message>(&query).fetch_all(pool).await
    }

    /// Count a participant's unread messages.
    pub async fn unread_count(pool: &PgPool, participant_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM messages
             WHERE participant_id = $1 AND read_status = FALSE",
        )
        .bind(participant_id)
        .fetch_one(pool)
        .await
    }
}
