//! Uploaded document metadata. File bytes live in the file store.

use kompass_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `documents` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Document {
    pub id: DbId,
    pub participant_id: DbId,
    pub file_name: String,
    pub file_path: String,
    pub uploaded_at: Timestamp,
}
