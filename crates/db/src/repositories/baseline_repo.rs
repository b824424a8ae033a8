//! Repository for the `grundforutsattningar` table.

use kompass_core::baseline::BaselineScores;
use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::baseline::Baseline;

/// Column list for grundforutsattningar queries.
const COLUMNS: &str = "\
    id, participant_id, fysisk_halsa, psykisk_halsa, missbruk, \
    bostadssituation, social_isolering, created_at, updated_at";

/// Provides baseline-score operations. One row per participant holding the
/// latest state; saves overwrite the whole row.
pub struct BaselineRepo;

impl BaselineRepo {
    /// Save all five baseline scores for a participant in one atomic upsert.
    pub async fn upsert(
        pool: &PgPool,
        participant_id: DbId,
        scores: &BaselineScores,
    ) -> Result<Baseline, sqlx::Error> {
        let query = format!(
            "INSERT INTO grundforutsattningar (
                participant_id, fysisk_halsa, psykisk_halsa, missbruk,
                bostadssituation, social_isolering
             )
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT ON CONSTRAINT uq_grundforutsattningar_participant
             DO UPDATE SET fysisk_halsa = EXCLUDED.fysisk_halsa,
                           psykisk_halsa = EXCLUDED.psykisk_halsa,
                           missbruk = EXCLUDED.missbruk,
                           bostadssituation = EXCLUDED.bostadssituation,
                           social_isolering = EXCLUDED.social_isolering,
                           updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Baseline>(&query)
            .bind(participant_id)
            .bind(scores.fysisk_halsa)
            .bind(scores.psykisk_halsa)
            .bind(scores.missbruk)
            .bind(scores.bostadssituation)
            .bind(scores.social_isolering)
            .fetch_one(pool)
            .await
    }

    /// Find a participant's baseline scores, if they were ever saved.
    pub async fn find_by_participant(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Option<Baseline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grundforutsattningar WHERE participant_id = $1");
        sqlx::query_as::<_, Baseline>(&query)
            .bind(participant_id)
            .fetch_optional(pool)
            .await
    }
}
