//! SMART task model.

use kompass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tasks` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: DbId,
    pub participant_id: DbId,
    pub specific: String,
    pub measurable: Option<String>,
    pub achievable: Option<String>,
    pub relevant: Option<String>,
    pub time_bound: Option<String>,
    pub responsible: Option<String>,
    pub progress: i32,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for adding a task.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub participant_id: Option<DbId>,
    pub specific: Option<String>,
    pub measurable: Option<String>,
    pub achievable: Option<String>,
    pub relevant: Option<String>,
    pub time_bound: Option<String>,
    pub responsible: Option<String>,
    pub progress: Option<i32>,
}
