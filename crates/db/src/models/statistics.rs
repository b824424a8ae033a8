//! Read models for the statistics endpoints.

use kompass_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One participant joined with their current intake step.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ParticipantOverview {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub created_by: String,
    pub created_at: Timestamp,
    pub avslutad: bool,
    pub avslutad_datum: Option<Timestamp>,
    /// 0 when the participant has not started the intake process.
    pub step: i32,
}

/// Aggregate counts for the dashboard.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SummaryCounts {
    pub total: i64,
    pub active: i64,
    pub closed: i64,
}

/// Participants per intake step.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StepCount {
    pub step: i32,
    pub count: i64,
}
