//! Intake step model.

use kompass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `user_steps` table: the current intake step for one
/// participant.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StepProgress {
    pub participant_id: DbId,
    pub step: i32,
    pub username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving a participant's current step.
#[derive(Debug, Deserialize)]
pub struct SaveStep {
    pub step: i32,
}

/// Response shape for step reads; absent rows become `{step: 0}`.
#[derive(Debug, Serialize)]
pub struct CurrentStep {
    pub step: i32,
    pub username: Option<String>,
}
