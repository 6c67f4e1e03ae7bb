use futures::executor::block_on;

use super::*;
use crate::auth::backend::MockAuthBackend;
use crate::auth::clock::ManualClock;
use crate::auth::service::AuthService;
use crate::auth::store::MemoryStorage;

fn session(role: Role) -> Session {
    Session {
        id: "u1".to_owned(),
        name: "Test".to_owned(),
        email: "t@x.com".to_owned(),
        role,
    }
}

#[test]
fn unauthenticated_is_sent_to_login_for_any_role() {
    assert_eq!(evaluate(None, Role::Employee), GuardDecision::Redirect("/login"));
    assert_eq!(evaluate(None, Role::Hr), GuardDecision::Redirect("/login"));
}

#[test]
fn employee_on_hr_route_goes_to_employee_dashboard() {
    let s = session(Role::Employee);
    assert_eq!(evaluate(Some(&s), Role::Hr), GuardDecision::Redirect("/employee/dashboard"));
}

#[test]
fn hr_on_employee_route_goes_to_hr_dashboard() {
    let s = session(Role::Hr);
    assert_eq!(evaluate(Some(&s), Role::Employee), GuardDecision::Redirect("/hr/dashboard"));
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(evaluate(Some(&session(Role::Hr)), Role::Hr), GuardDecision::Allow);
    assert_eq!(evaluate(Some(&session(Role::Employee)), Role::Employee), GuardDecision::Allow);
}

#[test]
fn employee_login_then_hr_route_redirects_to_employee_dashboard() {
    let svc = AuthService::new(MemoryStorage::new(), ManualClock::at(1_000), MockAuthBackend::new());
    let logged_in = block_on(svc.login("employee@x.com", "p")).unwrap();
    assert_eq!(logged_in.role, Role::Employee);

    let current = svc.session();
    assert_eq!(evaluate(current.as_ref(), Role::Hr), GuardDecision::Redirect("/employee/dashboard"));
    assert_eq!(evaluate(current.as_ref(), Role::Employee), GuardDecision::Allow);
}

#[test]
fn logout_sends_guarded_navigation_back_to_login() {
    let svc = AuthService::new(MemoryStorage::new(), ManualClock::at(1_000), MockAuthBackend::new());
    block_on(svc.login("hr@x.com", "p")).unwrap();
    svc.logout();
    assert_eq!(evaluate(svc.session().as_ref(), Role::Hr), GuardDecision::Redirect(LOGIN_PATH));
}
