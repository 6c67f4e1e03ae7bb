//! Credential verification seam.
//!
//! DESIGN
//! ======
//! The auth service only needs "who is this email/password" and "start a
//! password reset". Both are async so a real HTTP backend can replace
//! [`MockAuthBackend`] without touching the service or the route guard.
//!
//! The mock's role rule (email contains `"hr"`) is a demo placeholder and
//! must not survive into a real deployment.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::future::Future;
use std::time::Duration;

use super::role::Role;
use crate::util::delay::simulated_latency;

/// Authentication and password-reset failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Invalid credentials. Please try again.")]
    Rejected,
}

/// Identity returned by a successful credential check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

pub trait AuthBackend {
    /// Verify an email/password pair. Inputs are already known to be non-empty.
    fn authenticate(&self, email: &str, password: &str) -> impl Future<Output = Result<Identity, AuthError>>;

    /// Start a password reset for `email`. Input is already known to be non-empty.
    fn request_password_reset(&self, email: &str) -> impl Future<Output = Result<(), AuthError>>;
}

/// Demo backend: accepts every pair and derives the role from the email.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockAuthBackend {
    latency: Duration,
}

impl MockAuthBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every call by `latency` to mimic a network round trip.
    #[must_use]
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// Placeholder role rule: `hr` iff the email contains `"hr"`, case-sensitive.
    #[must_use]
    pub fn role_for_email(email: &str) -> Role {
        if email.contains("hr") { Role::Hr } else { Role::Employee }
    }

    fn identity_for(email: &str) -> Identity {
        let role = Self::role_for_email(email);
        let (id, name) = match role {
            Role::Hr => ("hr-123", "HR Manager"),
            Role::Employee => ("emp-456", "John Doe"),
        };
        Identity { id: id.to_owned(), name: name.to_owned(), email: email.to_owned(), role }
    }
}

impl AuthBackend for MockAuthBackend {
    async fn authenticate(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        simulated_latency(self.latency).await;
        Ok(Self::identity_for(email))
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        simulated_latency(self.latency).await;
        leptos::logging::log!("password reset requested for {email}");
        Ok(())
    }
}
