//! Goal model. One goal per participant.

use chrono::NaiveDate;
use kompass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `goals` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Goal {
    pub id: DbId,
    pub participant_id: DbId,
    pub goal: String,
    pub progress: i32,
    pub reflection1: Option<String>,
    pub reflection2: Option<String>,
    pub completion_date: NaiveDate,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving (creating or replacing) a participant's goal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveGoal {
    pub goal: Option<String>,
    pub progress: Option<i32>,
    pub reflection1: Option<String>,
    pub reflection2: Option<String>,
    pub completion_date: Option<NaiveDate>,
}

/// DTO for a progress-only update.
#[derive(Debug, Deserialize)]
pub struct UpdateGoalProgress {
    pub progress: Option<i32>,
}

/// Validated goal fields, built by the handler after checking the DTO.
#[derive(Debug)]
pub struct NewGoal {
    pub goal: String,
    pub progress: i32,
    pub reflection1: Option<String>,
    pub reflection2: Option<String>,
    pub completion_date: NaiveDate,
}
