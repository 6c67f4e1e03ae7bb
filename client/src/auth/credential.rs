//! Credential blob codec and the in-memory session projection.
//!
//! The blob is base64(JSON) of `{sub, name, email, role, exp}`. It is encoded,
//! not signed: anyone with storage access can forge one. Only acceptable
//! while every screen renders mock data.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::role::Role;

/// Why a stored value could not be turned back into a blob.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not a credential: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted credential payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialBlob {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Expiry as Unix epoch seconds.
    pub exp: i64,
}

impl CredentialBlob {
    /// Serialize to JSON and base64-encode.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Json`] if serialization fails.
    pub fn encode(&self) -> Result<String, CredentialError> {
        let json = serde_json::to_vec(self)?;
        Ok(STANDARD.encode(json))
    }

    /// Decode a stored token.
    ///
    /// # Errors
    ///
    /// Returns an error when the token is not padded standard base64 (only
    /// surrounding whitespace is trimmed) or the payload is not a well-formed
    /// blob (missing field, unknown role, non-integer `exp`).
    pub fn decode(raw: &str) -> Result<Self, CredentialError> {
        let bytes = STANDARD.decode(raw.trim())?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// A blob is expired once `exp` is no longer strictly in the future.
    #[must_use]
    pub fn is_expired_at(&self, now_epoch_secs: i64) -> bool {
        self.exp <= now_epoch_secs
    }
}

/// Authenticated user as seen by pages and the route guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&CredentialBlob> for Session {
    fn from(blob: &CredentialBlob) -> Self {
        Self {
            id: blob.sub.clone(),
            name: blob.name.clone(),
            email: blob.email.clone(),
            role: blob.role,
        }
    }
}
