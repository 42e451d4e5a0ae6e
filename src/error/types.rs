//! Error types
//!
//! Defines domain-specific error types for each module of the auth server.

use std::fmt;
use std::io;

/// Credential store errors
///
/// A failed store read is an infrastructure error, distinct from the
/// ordinary verification outcomes (wrong secret, unknown user).
#[derive(Debug)]
pub enum StoreError {
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(reason) => {
                write!(f, "Credential store unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Unavailable(error.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Unavailable(error.to_string())
    }
}

/// General auth server error that encompasses all error types
#[derive(Debug)]
pub enum AuthServerError {
    Store(StoreError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for AuthServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthServerError::Store(e) => write!(f, "Store error: {}", e),
            AuthServerError::Config(e) => write!(f, "Configuration error: {}", e),
            AuthServerError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AuthServerError {}

// Implement conversions from specific errors to AuthServerError
impl From<StoreError> for AuthServerError {
    fn from(error: StoreError) -> Self {
        AuthServerError::Store(error)
    }
}

impl From<config::ConfigError> for AuthServerError {
    fn from(error: config::ConfigError) -> Self {
        AuthServerError::Config(error)
    }
}

impl From<io::Error> for AuthServerError {
    fn from(error: io::Error) -> Self {
        AuthServerError::IoError(error)
    }
}
