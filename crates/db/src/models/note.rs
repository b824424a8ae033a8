//! Case note model. Append-only.

use kompass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub participant_id: DbId,
    pub author: String,
    pub content: String,
    pub date: Timestamp,
}

/// DTO for creating a note.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub content: Option<String>,
}
