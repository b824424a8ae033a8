//! Repository for the `tasks` table.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task};

/// Column list for tasks queries.
const COLUMNS: &str = "\
    id, participant_id, specific, measurable, achievable, relevant, \
    time_bound, responsible, progress, is_completed, completed_at, \
    created_by, created_at";

/// Provides SMART-task operations.
pub struct TaskRepo;

impl TaskRepo {
    /// Add a task for a participant. The caller has already validated that
    /// `specific` is present.
    pub async fn create(
        pool: &PgPool,
        participant_id: DbId,
        input: &CreateTask,
        created_by: &str,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (
                participant_id, specific, measurable, achievable, relevant,
                time_bound, responsible, progress, created_by
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 0), $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(participant_id)
            .bind(&input.specific)
            .bind(&input.measurable)
            .bind(&input.achievable)
            .bind(&input.relevant)
            .bind(&input.time_bound)
            .bind(&input.responsible)
            .bind(input.progress)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// List a participant's tasks, newest first.
    pub async fn list_by_participant(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE participant_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(participant_id)
            .fetch_all(pool)
            .await
    }

    /// List every task across all participants.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY created_at DESC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Mark a task completed. Returns `None` if the task does not exist.
    pub async fn complete(pool: &PgPool, task_id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                is_completed = TRUE,
                completed_at = NOW(),
                progress = 100
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(task_id)
            .fetch_optional(pool)
            .await
    }
}
