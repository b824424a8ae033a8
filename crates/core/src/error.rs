//! Domain error taxonomy shared across crates.

use crate::types::DbId;

/// Domain-level error, mapped to HTTP status codes at the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist (or is not visible to the caller).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A required field is missing or a value is out of range.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with current state (duplicate, already ended).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed to touch this resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Unexpected internal failure; message is never exposed to clients.
    #[error("Internal error: {0}")]
    Internal(String),
}
