use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures::executor::block_on;

use super::*;
use crate::auth::backend::{Identity, MockAuthBackend};
use crate::auth::clock::ManualClock;
use crate::auth::guard::{self, GuardDecision, LOGIN_PATH};
use crate::auth::role::Role;
use crate::auth::store::{MemoryStorage, TOKEN_KEY};

const NOW: i64 = 1_750_000_000;

type TestService = AuthService<MemoryStorage, ManualClock, MockAuthBackend>;

fn service() -> (TestService, MemoryStorage, ManualClock) {
    let storage = MemoryStorage::new();
    let clock = ManualClock::at(NOW);
    let svc = AuthService::new(storage.clone(), clock.clone(), MockAuthBackend::new());
    (svc, storage, clock)
}

fn stored_blob(storage: &MemoryStorage) -> Option<CredentialBlob> {
    storage.get(TOKEN_KEY).and_then(|raw| CredentialBlob::decode(&raw).ok())
}

// =============================================================
// initial state
// =============================================================

#[test]
fn new_service_is_unauthenticated() {
    let (svc, storage, _) = service();
    assert!(!svc.is_authenticated());
    assert_eq!(svc.session(), None);
    assert_eq!(storage.get(TOKEN_KEY), None);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_with_hr_email_assigns_hr() {
    let (svc, _, _) = service();
    let session = block_on(svc.login("hr@techmahindra.com", "secret")).unwrap();
    assert_eq!(session.role, Role::Hr);
    assert_eq!(session.id, "hr-123");
    assert!(svc.is_authenticated());
}

#[test]
fn login_with_other_email_assigns_employee() {
    let (svc, _, _) = service();
    let session = block_on(svc.login("employee@x.com", "p")).unwrap();
    assert_eq!(session.role, Role::Employee);
    assert_eq!(session.email, "employee@x.com");
}

#[test]
fn login_persists_blob_expiring_in_24_hours() {
    let (svc, storage, _) = service();
    block_on(svc.login("employee@x.com", "p")).unwrap();
    let blob = stored_blob(&storage).unwrap();
    assert_eq!(blob.exp, NOW + 86_400);
    assert_eq!(blob.role, Role::Employee);
    assert_eq!(blob.sub, "emp-456");
}

#[test]
fn login_rejects_empty_email_or_password_without_side_effects() {
    let (svc, storage, _) = service();
    assert_eq!(block_on(svc.login("", "x")), Err(AuthError::MissingCredentials));
    assert_eq!(block_on(svc.login("x", "")), Err(AuthError::MissingCredentials));
    assert!(!svc.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn failed_login_keeps_existing_session() {
    let (svc, storage, _) = service();
    let first = block_on(svc.login("hr@x.com", "p")).unwrap();
    assert!(block_on(svc.login("", "p")).is_err());
    assert_eq!(svc.session(), Some(first));
    assert_eq!(stored_blob(&storage).map(|b| b.role), Some(Role::Hr));
}

#[test]
fn relogin_replaces_role_in_session_and_store() {
    let (svc, storage, _) = service();
    block_on(svc.login("hr@x.com", "p")).unwrap();
    block_on(svc.login("employee@x.com", "p")).unwrap();
    assert_eq!(svc.session().map(|s| s.role), Some(Role::Employee));
    assert_eq!(stored_blob(&storage).map(|b| b.role), Some(Role::Employee));
}

#[test]
fn clones_share_session() {
    let (svc, _, _) = service();
    let other = svc.clone();
    block_on(svc.login("hr@x.com", "p")).unwrap();
    assert!(other.is_authenticated());
    other.logout();
    assert!(!svc.is_authenticated());
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_with_empty_store_stays_unauthenticated() {
    let (svc, _, _) = service();
    assert_eq!(svc.restore(), None);
    assert!(!svc.is_authenticated());
}

#[test]
fn restore_picks_up_unexpired_blob() {
    let (svc, storage, clock) = service();
    block_on(svc.login("hr@x.com", "p")).unwrap();

    clock.advance(3600);
    let fresh = AuthService::new(storage.clone(), clock, MockAuthBackend::new());
    let session = fresh.restore().unwrap();
    assert_eq!(session.role, Role::Hr);
    assert_eq!(session.name, "HR Manager");
    assert!(fresh.is_authenticated());
}

#[test]
fn restore_clears_blob_expiring_exactly_now() {
    let (svc, storage, clock) = service();
    block_on(svc.login("employee@x.com", "p")).unwrap();

    clock.set(NOW + SESSION_TTL_SECS);
    let fresh = AuthService::new(storage.clone(), clock, MockAuthBackend::new());
    assert_eq!(fresh.restore(), None);
    assert!(!fresh.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn restore_clears_expired_blob() {
    let (svc, storage, clock) = service();
    block_on(svc.login("employee@x.com", "p")).unwrap();

    clock.advance(SESSION_TTL_SECS + 1);
    assert_eq!(svc.restore(), None);
    assert!(!svc.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn restore_clears_corrupted_value() {
    let (svc, storage, _) = service();
    storage.set(TOKEN_KEY, "{not base64 at all");
    assert_eq!(svc.restore(), None);
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn restore_clears_base64_of_non_json() {
    let (svc, storage, _) = service();
    storage.set(TOKEN_KEY, &STANDARD.encode("plain text"));
    assert_eq!(svc.restore(), None);
    assert!(!svc.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_then_restore_is_unauthenticated() {
    let (svc, storage, clock) = service();
    block_on(svc.login("employee@x.com", "p")).unwrap();
    svc.logout();
    assert!(!svc.is_authenticated());

    let fresh = AuthService::new(storage, clock, MockAuthBackend::new());
    assert_eq!(fresh.restore(), None);
}

#[test]
fn logout_is_idempotent() {
    let (svc, storage, _) = service();
    svc.logout();
    svc.logout();
    assert!(!svc.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

// =============================================================
// password stubs
// =============================================================

#[test]
fn password_stubs_require_email() {
    let (svc, _, _) = service();
    assert_eq!(block_on(svc.reset_password("")), Err(AuthError::MissingEmail));
    assert_eq!(block_on(svc.forgot_password("")), Err(AuthError::MissingEmail));
}

#[test]
fn password_stubs_succeed_without_touching_session() {
    let (svc, storage, _) = service();
    assert_eq!(block_on(svc.reset_password("a@b.com")), Ok(()));
    assert_eq!(block_on(svc.forgot_password("a@b.com")), Ok(()));
    assert!(!svc.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

// =============================================================
// reactive state: the projection views and the guard read
// =============================================================

#[test]
fn state_is_pending_until_restore_runs() {
    let (svc, _, _) = service();
    assert!(svc.state().loading);
    svc.restore();
    assert_eq!(svc.state(), AuthState::resolved(None));
}

#[test]
fn state_tracks_login() {
    let (svc, _, _) = service();
    let session = block_on(svc.login("hr@x.com", "p")).unwrap();
    assert_eq!(svc.state(), AuthState::resolved(Some(session)));
}

#[test]
fn logout_through_service_alone_closes_guarded_routes() {
    let (svc, _, _) = service();
    block_on(svc.login("hr@x.com", "p")).unwrap();
    let viewer = svc.clone();
    assert_eq!(guard::evaluate(viewer.state().session.as_ref(), Role::Hr), GuardDecision::Allow);

    svc.logout();

    let state = viewer.state();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(guard::evaluate(state.session.as_ref(), Role::Hr), GuardDecision::Redirect(LOGIN_PATH));
}

#[test]
fn expired_restore_resolves_state_without_session() {
    let (svc, storage, clock) = service();
    block_on(svc.login("employee@x.com", "p")).unwrap();
    clock.advance(SESSION_TTL_SECS);
    let fresh = AuthService::new(storage, clock, MockAuthBackend::new());
    fresh.restore();
    assert_eq!(fresh.state(), AuthState::resolved(None));
}

// =============================================================
// backend rejection
// =============================================================

#[derive(Clone, Copy, Debug)]
struct RejectingBackend;

impl AuthBackend for RejectingBackend {
    async fn authenticate(&self, _email: &str, _password: &str) -> Result<Identity, AuthError> {
        Err(AuthError::Rejected)
    }

    async fn request_password_reset(&self, _email: &str) -> Result<(), AuthError> {
        Err(AuthError::Rejected)
    }
}

#[test]
fn backend_rejection_propagates_without_side_effects() {
    let storage = MemoryStorage::new();
    let svc = AuthService::new(storage.clone(), ManualClock::at(NOW), RejectingBackend);
    let err = block_on(svc.login("employee@x.com", "p")).unwrap_err();
    assert_eq!(err, AuthError::Rejected);
    assert_eq!(err.to_string(), "Invalid credentials. Please try again.");
    assert!(!svc.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn backend_rejection_keeps_prior_session() {
    let storage = MemoryStorage::new();
    let clock = ManualClock::at(NOW);
    let ok = AuthService::new(storage.clone(), clock.clone(), MockAuthBackend::new());
    block_on(ok.login("hr@x.com", "p")).unwrap();

    let svc = AuthService::new(storage.clone(), clock, RejectingBackend);
    assert!(svc.restore().is_some());
    assert!(block_on(svc.login("employee@x.com", "p")).is_err());
    assert_eq!(svc.session().map(|s| s.role), Some(Role::Hr));
    assert_eq!(stored_blob(&storage).map(|b| b.role), Some(Role::Hr));
}

#[test]
fn backend_rejection_surfaces_from_password_reset() {
    let svc = AuthService::new(MemoryStorage::new(), ManualClock::at(NOW), RejectingBackend);
    assert_eq!(block_on(svc.forgot_password("a@b.com")), Err(AuthError::Rejected));
}
