//! Verification result types
//!
//! Defines result values returned by credential verification.

/// Outcome of a credential check
///
/// Produced fresh per call and never persisted. `Mismatch` and `UnknownUser`
/// stay distinct here; the HTTP layer collapses them into one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationResult {
    /// Username known and the candidate secret equals the stored one
    Match,
    /// Username known but the candidate secret differs
    Mismatch,
    /// Username absent from the credential store
    UnknownUser,
}
