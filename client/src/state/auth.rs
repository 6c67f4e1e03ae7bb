//! Reactive projection of the auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned and written by [`AuthService`](crate::auth::AuthService); the app
//! shell exposes it to the route guard, navbar, and identity-aware pages as
//! a read-only `Signal<AuthState>` derived from the service.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::auth::{Role, Session};

/// Authentication state tracking the current session and restore status.
///
/// `loading` stays true until the browser has restored any persisted
/// session after hydration; guarded routes hold off redirecting until then.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the client has looked at storage.
    #[must_use]
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    /// Settled state carrying whatever the service currently holds.
    #[must_use]
    pub fn resolved(session: Option<Session>) -> Self {
        Self { session, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    /// Display name, falling back to a neutral greeting.
    pub fn display_name(&self) -> String {
        self.session.as_ref().map_or_else(|| "there".to_owned(), |s| s.name.clone())
    }
}
