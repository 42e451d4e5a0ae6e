//! HTTP route layer
//!
//! Maps HTTP requests onto the credential verifier and formats responses.

pub mod handlers;
pub mod requests;
pub mod responses;

pub use handlers::{AppState, router};
pub use requests::LoginRequest;
pub use responses::MessageResponse;
