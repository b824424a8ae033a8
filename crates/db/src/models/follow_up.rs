//! Follow-up meeting model.

use chrono::NaiveDate;
use kompass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `followups` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FollowUp {
    pub id: DbId,
    pub participant_id: DbId,
    pub from_name: String,
    pub from_email: String,
    pub to_email: String,
    pub subject: String,
    pub message: Option<String>,
    pub date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for booking a follow-up.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFollowUp {
    pub participant_id: Option<DbId>,
    pub from_name: Option<String>,
    pub from_email: Option<String>,
    pub to_email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
}
