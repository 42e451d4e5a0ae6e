//! Response payloads
//!
//! Defines the JSON bodies returned by the HTTP endpoints and the mapping
//! from verification outcomes to HTTP statuses.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

use crate::auth::VerificationResult;

/// Standard response messages
pub const LOGIN_SUCCESSFUL: &str = "Login successful!";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const INTERNAL_ERROR: &str = "Internal server error.";

/// Message body returned by every endpoint
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Map a verification outcome to an HTTP status and body.
///
/// A wrong secret and an unknown username produce identical responses so the
/// endpoint does not reveal which usernames exist.
pub fn verification_response(
    result: VerificationResult,
) -> (StatusCode, Json<MessageResponse>) {
    match result {
        VerificationResult::Match => {
            (StatusCode::OK, Json(MessageResponse::new(LOGIN_SUCCESSFUL)))
        }
        VerificationResult::Mismatch | VerificationResult::UnknownUser => (
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse::new(INVALID_CREDENTIALS)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_maps_to_200() {
        let (status, body) = verification_response(VerificationResult::Match);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, LOGIN_SUCCESSFUL);
    }

    #[test]
    fn test_mismatch_maps_to_401() {
        let (status, body) = verification_response(VerificationResult::Mismatch);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.message, INVALID_CREDENTIALS);
    }

    #[test]
    fn test_unknown_user_is_indistinguishable_from_mismatch() {
        let (mismatch_status, mismatch_body) =
            verification_response(VerificationResult::Mismatch);
        let (unknown_status, unknown_body) =
            verification_response(VerificationResult::UnknownUser);

        assert_eq!(mismatch_status, unknown_status);
        assert_eq!(mismatch_body.message, unknown_body.message);
    }
}
