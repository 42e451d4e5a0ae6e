//! Request payloads
//!
//! Defines the JSON bodies accepted by the HTTP endpoints.

use serde::Deserialize;

/// Body of a login attempt
///
/// Both fields are arbitrary strings; validation is not the boundary's job.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
