//! JSON file credential store
//!
//! Reads a flat JSON object mapping usernames to secrets, e.g.
//! `{"alice": "alice123"}`. The file is read on every lookup so edits take
//! effect without a restart.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::store::CredentialStore;

/// Credential store backed by a JSON file on disk
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_all(&self) -> Result<HashMap<String, String>, StoreError> {
        let data = fs::read_to_string(&self.path)?;
        let credentials = serde_json::from_str(&data)?;
        Ok(credentials)
    }
}

impl CredentialStore for JsonFileStore {
    fn lookup(&self, username: &str) -> Result<Option<String>, StoreError> {
        let credentials = self.read_all()?;
        Ok(credentials.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn store_with_contents(contents: &str) -> (NamedTempFile, JsonFileStore) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        let store = JsonFileStore::new(file.path().to_path_buf());
        (file, store)
    }

    #[test]
    fn test_lookup_known_user() {
        let (_file, store) = store_with_contents(r#"{"alice": "wonderland"}"#);

        assert_eq!(
            store.lookup("alice").unwrap(),
            Some("wonderland".to_string())
        );
    }

    #[test]
    fn test_lookup_unknown_user() {
        let (_file, store) = store_with_contents(r#"{"alice": "wonderland"}"#);

        assert_eq!(store.lookup("bob").unwrap(), None);
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let store = JsonFileStore::new(PathBuf::from("no-such-users.json"));

        let err = store.lookup("alice").unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn test_corrupt_file_is_unavailable() {
        let (_file, store) = store_with_contents("not json at all");

        let err = store.lookup("alice").unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn test_edits_are_visible_without_restart() {
        let (file, store) = store_with_contents(r#"{"alice": "wonderland"}"#);

        assert_eq!(store.lookup("carol").unwrap(), None);

        fs::write(file.path(), r#"{"alice": "wonderland", "carol": "pw"}"#).unwrap();

        assert_eq!(store.lookup("carol").unwrap(), Some("pw".to_string()));
    }
}
