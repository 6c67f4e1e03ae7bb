//! Auth service: the session state machine.
//!
//! ARCHITECTURE
//! ============
//! Two states, Unauthenticated (initial) and Authenticated. The stored
//! credential blob is the single source of truth; the in-memory session is
//! only ever derived from a blob that was just written or just read, so its
//! role cannot drift from what is persisted.
//!
//! The in-memory session lives in one reactive cell owned by the service.
//! Views read it through [`state`](AuthService::state) and never hold a copy,
//! so every transition made here is what the route guard sees next.
//!
//! The service is constructed once by the app shell with its storage, clock,
//! and backend injected, then handed to consumers through Leptos context.
//! Clones share the same session.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use leptos::prelude::*;

use super::backend::{AuthBackend, AuthError};
use super::clock::Clock;
use super::credential::{CredentialBlob, Session};
use super::store::{SessionStore, StorageBackend};
use crate::state::auth::AuthState;

/// Lifetime of a freshly issued credential.
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct AuthService<S, C, B> {
    store: SessionStore<S>,
    clock: C,
    backend: B,
    state: ArcRwSignal<AuthState>,
}

impl<S, C, B> AuthService<S, C, B>
where
    S: StorageBackend,
    C: Clock,
    B: AuthBackend,
{
    /// Build an Unauthenticated service that has not yet looked at storage.
    /// Call [`restore`](Self::restore) to pick up a session persisted by an
    /// earlier page load.
    pub fn new(storage: S, clock: C, backend: B) -> Self {
        Self {
            store: SessionStore::new(storage),
            clock,
            backend,
            state: ArcRwSignal::new(AuthState::pending()),
        }
    }

    /// Current auth state. Tracked, so a reactive scope reading it re-runs
    /// on every login, logout, and restore.
    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    /// Current session, if authenticated. Untracked.
    pub fn session(&self) -> Option<Session> {
        self.state.with_untracked(|s| s.session.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with_untracked(AuthState::is_authenticated)
    }

    /// Load the persisted blob at startup.
    ///
    /// A blob whose `exp` is not strictly in the future, or a stored value
    /// that does not decode, is cleared from storage and leaves the service
    /// Unauthenticated.
    pub fn restore(&self) -> Option<Session> {
        let now = self.clock.now_epoch_secs();
        let restored = match self.store.load() {
            Some(blob) if !blob.is_expired_at(now) => Some(Session::from(&blob)),
            Some(blob) => {
                leptos::logging::log!("stored session for {} expired at {}", blob.email, blob.exp);
                self.store.clear();
                None
            }
            None => {
                self.store.clear();
                None
            }
        };
        self.state.set(AuthState::resolved(restored.clone()));
        restored
    }

    /// Authenticate and persist a new 24-hour credential.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingCredentials`] if either field is empty, or whatever
    /// the backend rejects with. State is untouched on error.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let identity = self.backend.authenticate(email, password).await?;

        let blob = CredentialBlob {
            sub: identity.id,
            name: identity.name,
            email: identity.email,
            role: identity.role,
            exp: self.clock.now_epoch_secs() + SESSION_TTL_SECS,
        };
        self.store.save(&blob);

        let session = Session::from(&blob);
        self.state.set(AuthState::resolved(Some(session.clone())));
        Ok(session)
    }

    /// Drop the session and the stored blob. Safe to call in any state.
    pub fn logout(&self) {
        self.store.clear();
        self.state.set(AuthState::resolved(None));
    }

    /// Placeholder reset request; succeeds for any non-empty email.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingEmail`] if `email` is empty.
    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        if email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        self.backend.request_password_reset(email).await
    }

    /// Placeholder "send me a reset link"; succeeds for any non-empty email.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingEmail`] if `email` is empty.
    pub async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        if email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        self.backend.request_password_reset(email).await
    }
}
