//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires admin privileges.
//! - [`rbac::RequireStaff`] -- Rejects `deltagare` accounts.

pub mod auth;
pub mod rbac;
