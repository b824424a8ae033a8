//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where the API allows patches, a `Deserialize` update DTO

pub mod baseline;
pub mod document;
pub mod follow_up;
pub mod goal;
pub mod insats;
pub mod login_attempt;
pub mod message;
pub mod note;
pub mod participant;
pub mod rating;
pub mod selected_insats;
pub mod statistics;
pub mod step;
pub mod summary;
pub mod task;
pub mod tip;
pub mod user;
