use super::*;

const ALL_STATIC: [AppRoute; 15] = [
    AppRoute::Landing,
    AppRoute::Login,
    AppRoute::EmployeeDashboard,
    AppRoute::EmployeeTasks,
    AppRoute::EmployeeDocuments,
    AppRoute::EmployeeProfile,
    AppRoute::EmployeeSupport,
    AppRoute::HrDashboard,
    AppRoute::HrEmployees,
    AppRoute::HrTaskTemplates,
    AppRoute::HrReports,
    AppRoute::OfficeMap,
    AppRoute::HolidayCalendar,
    AppRoute::CompanyPolicies,
    AppRoute::EmployeeTask(String::new()),
];

#[test]
fn static_routes_resolve_from_their_own_path() {
    for route in ALL_STATIC.iter().filter(|r| !matches!(r, AppRoute::EmployeeTask(_))) {
        assert_eq!(&AppRoute::resolve(&route.path()), route, "{}", route.path());
    }
}

#[test]
fn task_detail_captures_id() {
    assert_eq!(AppRoute::resolve("/employee/tasks/upload-id"), AppRoute::EmployeeTask("upload-id".to_owned()));
    assert_eq!(AppRoute::EmployeeTask("x".to_owned()).path(), "/employee/tasks/x");
}

#[test]
fn trailing_slash_is_ignored() {
    assert_eq!(AppRoute::resolve("/hr/reports/"), AppRoute::HrReports);
    assert_eq!(AppRoute::resolve(""), AppRoute::Landing);
}

#[test]
fn unknown_paths_are_not_found() {
    assert_eq!(AppRoute::resolve("/admin"), AppRoute::NotFound);
    assert_eq!(AppRoute::resolve("/employee/tasks/a/b"), AppRoute::NotFound);
    assert_eq!(AppRoute::resolve("/HR/dashboard"), AppRoute::NotFound);
}

#[test]
fn required_roles_match_route_areas() {
    assert_eq!(AppRoute::Landing.required_role(), None);
    assert_eq!(AppRoute::Login.required_role(), None);
    assert_eq!(AppRoute::NotFound.required_role(), None);
    for path in ["/hr/dashboard", "/hr/employees", "/hr/task-templates", "/hr/reports"] {
        assert_eq!(AppRoute::resolve(path).required_role(), Some(Role::Hr), "{path}");
    }
    for path in [
        "/employee/dashboard",
        "/employee/tasks",
        "/employee/tasks/profile",
        "/employee/documents",
        "/employee/profile",
        "/employee/support",
        "/office-map",
        "/holiday-calendar",
        "/company-policies",
    ] {
        assert_eq!(AppRoute::resolve(path).required_role(), Some(Role::Employee), "{path}");
    }
}

#[test]
fn landing_paths_are_guarded_by_their_own_role() {
    for role in [Role::Employee, Role::Hr] {
        assert_eq!(AppRoute::resolve(role.landing_path()).required_role(), Some(role));
    }
}

#[test]
fn nav_items_per_role() {
    let employee: Vec<_> = nav_items(Role::Employee).iter().map(AppRoute::title).collect();
    assert_eq!(employee, vec!["Dashboard", "My Tasks", "Documents", "My Profile", "Support"]);
    let hr: Vec<_> = nav_items(Role::Hr).iter().map(AppRoute::title).collect();
    assert_eq!(hr, vec!["Dashboard", "Employees", "Task Templates", "Reports"]);
}

#[test]
fn nav_items_only_link_to_routes_the_role_may_open() {
    for role in [Role::Employee, Role::Hr] {
        assert!(nav_items(role).iter().all(|r| r.required_role() == Some(role)));
    }
    assert!(resource_items().iter().all(|r| r.required_role() == Some(Role::Employee)));
}

// =============================================================================
// guard_path: the decision ProtectedRoute renders
// =============================================================================

fn session(role: Role) -> Session {
    Session { id: "u-1".to_owned(), name: "User".to_owned(), email: "u@x.com".to_owned(), role }
}

#[test]
fn guard_path_sends_visitors_to_login_from_every_guarded_page() {
    for route in ALL_STATIC.iter().filter(|r| r.required_role().is_some()) {
        let path = match route {
            AppRoute::EmployeeTask(_) => "/employee/tasks/upload-id".to_owned(),
            other => other.path(),
        };
        assert_eq!(guard_path(&path, None), GuardDecision::Redirect("/login"), "{path}");
    }
}

#[test]
fn guard_path_keeps_resource_pages_employee_only() {
    let hr = session(Role::Hr);
    let employee = session(Role::Employee);
    for path in ["/office-map", "/holiday-calendar", "/company-policies"] {
        assert_eq!(guard_path(path, Some(&employee)), GuardDecision::Allow, "{path}");
        assert_eq!(guard_path(path, Some(&hr)), GuardDecision::Redirect("/hr/dashboard"), "{path}");
    }
}

#[test]
fn guard_path_sends_employee_away_from_hr_area() {
    let employee = session(Role::Employee);
    for path in ["/hr/dashboard", "/hr/employees", "/hr/task-templates", "/hr/reports/"] {
        assert_eq!(guard_path(path, Some(&employee)), GuardDecision::Redirect("/employee/dashboard"), "{path}");
    }
}

#[test]
fn guard_path_allows_task_detail_for_employee_only() {
    let path = "/employee/tasks/upload-id";
    assert_eq!(guard_path(path, Some(&session(Role::Employee))), GuardDecision::Allow);
    assert_eq!(guard_path(path, Some(&session(Role::Hr))), GuardDecision::Redirect("/hr/dashboard"));
}

#[test]
fn guard_path_leaves_public_pages_open() {
    for path in ["/", "/login", "/no-such-page"] {
        assert_eq!(guard_path(path, None), GuardDecision::Allow, "{path}");
    }
}
