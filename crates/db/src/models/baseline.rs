//! Baseline conditions (grundförutsättningar) model.

use kompass_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `grundforutsattningar` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Baseline {
    pub id: DbId,
    pub participant_id: DbId,
    pub fysisk_halsa: i32,
    pub psykisk_halsa: i32,
    pub missbruk: i32,
    pub bostadssituation: i32,
    pub social_isolering: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
