//! Selected insatser and decisions model.
//!
//! Selection and decision share one table: a row is created when a template
//! is picked for a participant and enriched when the formal decision
//! (beslut) is recorded. The `(participant_id, insats_id)` pair is unique.

use chrono::NaiveDate;
use kompass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `selected_insatser` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SelectedInsats {
    pub id: DbId,
    pub participant_id: DbId,
    pub insats_id: DbId,
    pub step: Option<i32>,
    pub name: Option<String>,
    pub focus_type: Option<String>,
    pub description: Option<String>,
    pub combine_with: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub responsible: Option<String>,
    pub bestallare: Option<String>,
    pub insats: Option<String>,
    pub beslut: Option<String>,
    pub kategori: Option<String>,
    pub executor: Option<String>,
    pub workplace: Option<String>,
    pub ansvarig: Option<String>,
    pub handledare: Option<String>,
    pub telefon: Option<String>,
    pub avslutad_status: Option<String>,
    pub avslutningsdatum: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for selecting templates at a step.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectInsatser {
    pub step: i32,
    /// Catalog ids of the chosen templates.
    pub insats_ids: Vec<DbId>,
}

/// DTO for recording a decision on a (participant, insats) pair.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDecision {
    pub bestallare: Option<String>,
    pub insats: Option<String>,
    pub beslut: Option<String>,
    pub kategori: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub executor: Option<String>,
    pub workplace: Option<String>,
    pub ansvarig: Option<String>,
    pub handledare: Option<String>,
    pub telefon: Option<String>,
}

/// DTO for ending an insats.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndInsats {
    pub ending_status: Option<String>,
}
