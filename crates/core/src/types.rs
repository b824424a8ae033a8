//! Shared scalar aliases used across the workspace.

/// Primary-key type for every table (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// Timestamps are stored and serialized in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
