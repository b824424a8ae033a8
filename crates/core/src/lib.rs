//! Domain logic for the kompass case-management backend.
//!
//! Pure validation rules, constants, and the error taxonomy shared by the
//! persistence and HTTP layers. Nothing in this crate performs I/O.

pub mod baseline;
pub mod error;
pub mod ratings;
pub mod roles;
pub mod steps;
pub mod types;
pub mod validation;
