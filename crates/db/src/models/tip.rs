//! Tip model: shared links/notes shown to participants until they expire.

use chrono::NaiveDate;
use kompass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tips` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Tip {
    pub id: DbId,
    pub text: String,
    pub url: Option<String>,
    pub expire_date: NaiveDate,
    pub created_at: Timestamp,
}

/// DTO for adding a tip.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTip {
    pub text: Option<String>,
    pub url: Option<String>,
    pub expire_date: Option<NaiveDate>,
}
