//! Repository for the `insatser` catalog and its attached files.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::insats::{CreateInsats, Insats, InsatsWithFiles, NewInsatsFile};

/// Column list for insatser queries.
const COLUMNS: &str = "\
    id, name, focus_type, description, combine_with, insats_type1, \
    insats_type2, insats_type3, insats_type4, insats_type5, start_date, \
    end_date, last_date, responsible, created_at";

/// Aliased column list for joined queries.
const JOINED_COLUMNS: &str = "\
    i.id, i.name, i.focus_type, i.description, i.combine_with, \
    i.insats_type1, i.insats_type2, i.insats_type3, i.insats_type4, \
    i.insats_type5, i.start_date, i.end_date, i.last_date, i.responsible, \
    i.created_at, COALESCE(f.files, '[]'::json) AS files";

/// Subquery aggregating each template's files into a JSON array.
const FILES_JOIN: &str = "\
    LEFT JOIN (
        SELECT insats_id,
               json_agg(json_build_object(
                   'file_name', file_name,
                   'file_path', file_path
               )) AS files
        FROM insats_files
        GROUP BY insats_id
    ) f ON f.insats_id = i.id";

/// Provides catalog operations for insats templates.
pub struct InsatsRepo;

impl InsatsRepo {
    /// Create a catalog template and its file rows in one transaction.
    ///
    /// The caller has already validated that `name` and `focus_type` are
    /// present and stored the file bytes; only metadata is persisted here.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInsats,
        files: &[NewInsatsFile],
    ) -> Result<Insats, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO insatser (
                name, focus_type, description, combine_with, insats_type1,
                insats_type2, insats_type3, insats_type4, insats_type5,
                start_date, end_date, last_date, responsible
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        let insats = sqlx::query_as::<_, Insats>(&query)
            .bind(&input.name)
            .bind(&input.focus_type)
            .bind(&input.description)
            .bind(&input.combine_with)
            .bind(&input.insats_type1)
            .bind(&input.insats_type2)
            .bind(&input.insats_type3)
            .bind(&input.insats_type4)
            .bind(&input.insats_type5)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.last_date)
            .bind(&input.responsible)
            .fetch_one(&mut *tx)
            .await?;

        for file in files {
            sqlx::query(
                "INSERT INTO insats_files (insats_id, file_name, file_path)
                 VALUES ($1, $2, $3)",
            )
            .bind(insats.id)
            .bind(&file.file_name)
            .bind(&file.file_path)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(insats)
    }

    /// List all templates with their files, newest first. Templates without
    /// files get an empty array.
    pub async fn list_with_files(pool: &PgPool) -> Result<Vec<InsatsWithFiles>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM insatser i {FILES_JOIN} ORDER BY i.created_at DESC"
        );
        sqlx::query_as::<_, InsatsWithFiles>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find one template with its files.
    pub async fn find_with_files(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InsatsWithFiles>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} FROM insatser i {FILES_JOIN} WHERE i.id = $1");
        sqlx::query_as::<_, InsatsWithFiles>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a template. File rows cascade. Returns `true` if a row was
    /// deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM insatser WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
