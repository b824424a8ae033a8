//! Repository for the `tips` table.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::tip::{CreateTip, Tip};

/// Column list for tips queries.
const COLUMNS: &str = "id, text, url, expire_date, created_at";

/// Provides tip operations.
pub struct TipRepo;

impl TipRepo {
    /// Add a tip. The caller has already validated `text` and
    /// `expire_date`.
    pub async fn create(pool: &PgPool, input: &CreateTip) -> Result<Tip, sqlx::Error> {
        let query = format!(
            "INSERT INTO tips (text, url, expire_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tip>(&query)
            .bind(&input.text)
            .bind(&input.url)
            .bind(input.expire_date)
            .fetch_one(pool)
            .await
    }

    /// List unexpired tips, newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Tip>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tips
             WHERE expire_date >= CURRENT_DATE
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Tip>(&query).fetch_all(pool).await
    }

    /// Delete a tip. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tips WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
