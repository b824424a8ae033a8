//! Participant (deltagare) model.

use chrono::NaiveDate;
use kompass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `participants` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Participant {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub education: String,
    pub license: Option<String>,
    pub personal_number: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub phone_number: String,
    pub unemployment_time: String,
    pub initiated_by: String,
    pub created_by: String,
    pub created_at: Timestamp,
    pub avslutad: bool,
    pub avslutsorsak: Option<String>,
    pub avslutad_av: Option<String>,
    pub avslutad_datum: Option<Timestamp>,
}

/// DTO for registering a new participant. Field names follow the client's
/// camelCase convention.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterParticipant {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub education_level: Option<String>,
    pub license: Option<String>,
    pub personal_number: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
    pub unemployment_time: Option<String>,
    pub initiated_by: Option<String>,
}

/// DTO for closing (avsluta) a participant.
#[derive(Debug, Deserialize)]
pub struct CloseParticipant {
    pub reason: Option<String>,
}

/// Validated registration fields, built by the handler after checking the
/// DTO. Everything is owned and required except `license`.
#[derive(Debug)]
pub struct NewParticipant {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub education: String,
    pub license: Option<String>,
    pub personal_number: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub phone_number: String,
    pub unemployment_time: String,
    pub initiated_by: String,
}

/// Filters for the statistics participant listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// `"avslutad"` (closed) or `"pågående"` (active); omitted means both.
    pub status: Option<String>,
}
