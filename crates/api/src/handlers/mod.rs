//! Request handlers, one submodule per resource.
//!
//! Handlers validate input with `kompass_core` helpers, delegate to the
//! corresponding repository in `kompass_db`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod auth;
pub mod baseline;
pub mod documents;
pub mod follow_ups;
pub mod goals;
pub mod insatser;
pub mod messages;
pub mod notes;
pub mod participants;
pub mod ratings;
pub mod selected_insatser;
pub mod statistics;
pub mod steps;
pub mod summaries;
pub mod tasks;
pub mod tips;
pub mod users;
