//! Credential store
//!
//! Pluggable username-to-secret lookup backends behind a single read
//! interface.

pub mod file;
pub mod memory;

use crate::error::StoreError;

/// Read-only lookup from username to stored secret.
///
/// Usernames are unique keys; `None` means the user is unknown, which is an
/// ordinary outcome and not an error.
pub trait CredentialStore: Send + Sync {
    fn lookup(&self, username: &str) -> Result<Option<String>, StoreError>;
}

pub use file::JsonFileStore;
pub use memory::MemoryStore;
