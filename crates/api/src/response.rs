//! JSON response envelope.
//!
//! Every successful endpoint responds with a `{ "data": ... }` body so the
//! client can destructure responses uniformly; failures use the
//! `{ "error", "code" }` shape produced by [`crate::error`].

use serde::Serialize;

/// The `{ "data": T }` body handlers return on success.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
