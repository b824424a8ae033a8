//! Chat message model.

use kompass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `messages` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Message {
    pub id: DbId,
    pub participant_id: DbId,
    pub sender: String,
    pub text: String,
    pub read_status: bool,
    pub sent_at: Timestamp,
}

/// DTO for sending a message.
#[derive(Debug, Deserialize)]
pub struct CreateMessage {
    pub text: Option<String>,
}
