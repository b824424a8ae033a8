//! Insats catalog model.

use chrono::NaiveDate;
use kompass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `insatser` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Insats {
    pub id: DbId,
    pub name: String,
    pub focus_type: String,
    pub description: Option<String>,
    pub combine_with: Option<String>,
    pub insats_type1: Option<String>,
    pub insats_type2: Option<String>,
    pub insats_type3: Option<String>,
    pub insats_type4: Option<String>,
    pub insats_type5: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub responsible: Option<String>,
    pub created_at: Timestamp,
}

/// A catalog row with its attached files aggregated into a JSON array.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InsatsWithFiles {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub insats: Insats,
    /// `[{ "file_name": .., "file_path": .. }, ..]`, `[]` when no files.
    pub files: serde_json::Value,
}

/// DTO for creating a catalog template. Dates arrive as strings and empty
/// strings mean "not set", matching the client's form submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInsats {
    pub name: Option<String>,
    pub focus_type: Option<String>,
    pub description: Option<String>,
    pub combine_with: Option<String>,
    pub insats_type1: Option<String>,
    pub insats_type2: Option<String>,
    pub insats_type3: Option<String>,
    pub insats_type4: Option<String>,
    pub insats_type5: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub responsible: Option<String>,
}

/// Stored file metadata passed to the repository after upload.
#[derive(Debug)]
pub struct NewInsatsFile {
    pub file_name: String,
    pub file_path: String,
}
