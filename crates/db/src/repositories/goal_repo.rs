//! Repository for the `goals` table. One goal per participant.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::goal::{Goal, NewGoal};

/// Column list for goals queries.
const COLUMNS: &str = "\
    id, participant_id, goal, progress, reflection1, reflection2, \
    completion_date, is_completed, completed_at, created_by, created_at, \
    updated_at";

/// Provides goal operations.
pub struct GoalRepo;

impl GoalRepo {
    /// Save a participant's goal in one atomic upsert.
    ///
    /// When the trimmed goal text differs from the stored text the
    /// completion state resets in the same statement; saving the same text
    /// preserves it.
    pub async fn upsert(
        pool: &PgPool,
        participant_id: DbId,
        input: &NewGoal,
        created_by: &str,
    ) -> Result<Goal, sqlx::Error> {
        let query = format!(
            "INSERT INTO goals (
                participant_id, goal, progress, reflection1, reflection2,
                completion_date, created_by
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT ON CONSTRAINT uq_goals_participant
             DO UPDATE SET
                goal = EXCLUDED.goal,
                progress = EXCLUDED.progress,
                reflection1 = EXCLUDED.reflection1,
                reflection2 = EXCLUDED.reflection2,
                completion_date = EXCLUDED.completion_date,
                is_completed = CASE
                    WHEN btrim(goals.goal) IS DISTINCT FROM btrim(EXCLUDED.goal)
                    THEN FALSE ELSE goals.is_completed END,
                completed_at = CASE
                    WHEN btrim(goals.goal) IS DISTINCT FROM btrim(EXCLUDED.goal)
                    THEN NULL ELSE goals.completed_at END,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(participant_id)
            .bind(&input.goal)
            .bind(input.progress)
            .bind(&input.reflection1)
            .bind(&input.reflection2)
            .bind(input.completion_date)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a participant's goal.
    pub async fn find_by_participant(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE participant_id = $1");
        sqlx::query_as::<_, Goal>(&query)
            .bind(participant_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a goal completed. Returns `None` unless both ids match.
    pub async fn complete(
        pool: &PgPool,
        participant_id: DbId,
        goal_id: DbId,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!(
            "UPDATE goals SET
                is_completed = TRUE,
                completed_at = NOW(),
                updated_at = NOW()
             WHERE id = $1 AND participant_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(goal_id)
            .bind(participant_id)
            .fetch_optional(pool)
            .await
    }

    /// Update only the progress of a participant's goal.
    pub async fn update_progress(
        pool: &PgPool,
        participant_id: DbId,
        progress: i32,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!(
            "UPDATE goals SET progress = $2, updated_at = NOW()
             WHERE participant_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(participant_id)
            .bind(progress)
            .fetch_optional(pool)
            .await
    }

    /// List every participant's goal.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals ORDER BY created_at DESC");
        sqlx::query_as::<_, Goal>(&query).fetch_all(pool).await
    }
}
