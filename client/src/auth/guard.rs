//! Route guard decision for role-scoped pages.
//!
//! Evaluated fresh on every navigation; there is no retry and no memory of
//! earlier decisions.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::credential::Session;
use super::role::Role;

/// Login entry point for unauthenticated visitors.
pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the guarded content.
    Allow,
    /// Navigate elsewhere instead (replacing the history entry).
    Redirect(&'static str),
}

/// Decide whether `session` may view a page that requires `required`.
#[must_use]
pub fn evaluate(session: Option<&Session>, required: Role) -> GuardDecision {
    let Some(session) = session else {
        return GuardDecision::Redirect(LOGIN_PATH);
    };
    match (session.role, required) {
        (Role::Employee, Role::Employee) | (Role::Hr, Role::Hr) => GuardDecision::Allow,
        (actual, _) => GuardDecision::Redirect(actual.landing_path()),
    }
}
