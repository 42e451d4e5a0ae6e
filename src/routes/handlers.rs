//! Route handlers for the auth server.
//!
//! Defines handler functions for the HTTP endpoints, wiring request payloads
//! through the credential verifier and mapping outcomes to responses.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use log::{error, info};

use crate::auth::Verifier;
use crate::routes::requests::LoginRequest;
use crate::routes::responses::{INTERNAL_ERROR, MessageResponse, verification_response};

/// Shared state available to all route handlers
pub struct AppState {
    pub verifier: Verifier,
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Handles POST /login: verifies the submitted credentials.
///
/// Normal verification outcomes become 200/401 responses; a failed store
/// read is logged and surfaced as a server error.
async fn handle_login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> (StatusCode, Json<MessageResponse>) {
    match state.verifier.verify(&request.username, &request.password) {
        Ok(result) => {
            info!("Login attempt for '{}': {:?}", request.username, result);
            verification_response(result)
        }
        Err(e) => {
            error!("Credential store lookup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new(INTERNAL_ERROR)),
            )
        }
    }
}

/// Handles GET /health: liveness probe.
async fn handle_health() -> &'static str {
    "OK"
}
