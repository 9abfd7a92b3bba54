//! PKCE (RFC 7636) verifier/challenge pairs and opaque login state values.

#[cfg(test)]
#[path = "pkce_test.rs"]
mod pkce_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// The only challenge method this client sends.
pub const CHALLENGE_METHOD: &str = "S256";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PkcePair {
    pub verifier: String,
    pub challenge: String,
}

/// S256 challenge for `verifier`: base64url(sha256(verifier)) without padding.
#[must_use]
pub fn challenge_for(verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}

/// Fresh 64-character verifier built from two random v4 UUIDs.
#[must_use]
pub fn generate() -> PkcePair {
    let verifier = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    let challenge = challenge_for(&verifier);
    PkcePair { verifier, challenge }
}

/// Random value for the OAuth `state` parameter.
#[must_use]
pub fn random_state() -> String {
    Uuid::new_v4().simple().to_string()
}
