//! Participant summary snapshots. Append-only, latest wins.

use kompass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `participant_summaries` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Summary {
    pub id: DbId,
    pub participant_id: DbId,
    pub summary: String,
    pub created_at: Timestamp,
}

/// DTO for saving a summary.
#[derive(Debug, Deserialize)]
pub struct CreateSummary {
    pub summary: Option<String>,
}
