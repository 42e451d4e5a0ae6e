//! Credential verifier
//!
//! Implements the credential check: one store lookup followed by an exact
//! comparison of the candidate secret against the stored one.

use std::sync::Arc;

use crate::auth::results::VerificationResult;
use crate::error::StoreError;
use crate::store::CredentialStore;

/// Checks candidate secrets against a credential store.
pub struct Verifier {
    store: Arc<dyn CredentialStore>,
}

impl Verifier {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Compares `candidate` against the stored secret for `username`.
    ///
    /// Both arguments are taken as-is; no trimming or normalization is
    /// applied, and empty strings are ordinary inputs. Read-only: the store
    /// is never mutated. Fails only when the store itself cannot be read.
    pub fn verify(
        &self,
        username: &str,
        candidate: &str,
    ) -> Result<VerificationResult, StoreError> {
        match self.store.lookup(username)? {
            Some(stored) if stored == candidate => Ok(VerificationResult::Match),
            Some(_) => Ok(VerificationResult::Mismatch),
            None => Ok(VerificationResult::UnknownUser),
        }
    }
}
