//! Assessment snapshot (rating) model. Rows are append-only.

use kompass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ratings` table: nine ordinal scores at one point in time.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Rating {
    pub id: DbId,
    pub participant_id: DbId,
    pub hantering_av_vardagen: i32,
    pub halsa: i32,
    pub koncentrationsformaga: i32,
    pub tro_pa_att_fa_jobb: i32,
    pub stod_fran_natverk: i32,
    pub samarbetsformaga: i32,
    pub jobbsokningsbeteende: i32,
    pub kunskap_om_arbetsmarknaden: i32,
    pub malmedvetenhet: i32,
    pub created_at: Timestamp,
}

/// Raw DTO as received from the client; every score is validated as
/// present and in range before insertion.
#[derive(Debug, Deserialize)]
pub struct CreateRating {
    pub hantering_av_vardagen: Option<i32>,
    pub halsa: Option<i32>,
    pub koncentrationsformaga: Option<i32>,
    pub tro_pa_att_fa_jobb: Option<i32>,
    pub stod_fran_natverk: Option<i32>,
    pub samarbetsformaga: Option<i32>,
    pub jobbsokningsbeteende: Option<i32>,
    pub kunskap_om_arbetsmarknaden: Option<i32>,
    pub malmedvetenhet: Option<i32>,
}

/// A fully validated set of nine scores, ready to insert.
#[derive(Debug, Clone, Copy)]
pub struct RatingScores {
    pub hantering_av_vardagen: i32,
    pub halsa: i32,
    pub koncentrationsformaga: i32,
    pub tro_pa_att_fa_jobb: i32,
    pub stod_fran_natverk: i32,
    pub samarbetsformaga: i32,
    pub jobbsokningsbeteende: i32,
    pub kunskap_om_arbetsmarknaden: i32,
    pub malmedvetenhet: i32,
}
