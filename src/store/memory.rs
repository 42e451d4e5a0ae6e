//! In-memory credential store
//!
//! Holds credentials in a map loaded once at construction. Used by tests and
//! deployments with a fixed user set.

use std::collections::HashMap;

use crate::error::StoreError;
use crate::store::CredentialStore;

/// Credential store backed by an in-memory map
#[derive(Debug, Default)]
pub struct MemoryStore {
    credentials: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new(credentials: HashMap<String, String>) -> Self {
        Self { credentials }
    }

    /// Insert or replace a credential record
    pub fn insert(&mut self, username: &str, secret: &str) {
        self.credentials
            .insert(username.to_string(), secret.to_string());
    }
}

impl CredentialStore for MemoryStore {
    fn lookup(&self, username: &str) -> Result<Option<String>, StoreError> {
        Ok(self.credentials.get(username).cloned())
    }
}
