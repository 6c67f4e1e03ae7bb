//! Route table: every browser path, its title, and the role it requires.
//!
//! The Leptos router in `app` declares the same paths and mounts pages.
//! Which role a page needs is answered here and only here: `ProtectedRoute`
//! gates the current location through [`guard_path`].

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::auth::guard::{self, GuardDecision};
use crate::auth::{Role, Session};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Landing,
    Login,
    EmployeeDashboard,
    EmployeeTasks,
    EmployeeTask(String),
    EmployeeDocuments,
    EmployeeProfile,
    EmployeeSupport,
    HrDashboard,
    HrEmployees,
    HrTaskTemplates,
    HrReports,
    OfficeMap,
    HolidayCalendar,
    CompanyPolicies,
    NotFound,
}

impl AppRoute {
    /// Match a location pathname. Trailing slashes are ignored.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Landing,
            ["login"] => Self::Login,
            ["employee", "dashboard"] => Self::EmployeeDashboard,
            ["employee", "tasks"] => Self::EmployeeTasks,
            ["employee", "tasks", id] => Self::EmployeeTask((*id).to_owned()),
            ["employee", "documents"] => Self::EmployeeDocuments,
            ["employee", "profile"] => Self::EmployeeProfile,
            ["employee", "support"] => Self::EmployeeSupport,
            ["hr", "dashboard"] => Self::HrDashboard,
            ["hr", "employees"] => Self::HrEmployees,
            ["hr", "task-templates"] => Self::HrTaskTemplates,
            ["hr", "reports"] => Self::HrReports,
            ["office-map"] => Self::OfficeMap,
            ["holiday-calendar"] => Self::HolidayCalendar,
            ["company-policies"] => Self::CompanyPolicies,
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::EmployeeDashboard => "/employee/dashboard".to_owned(),
            Self::EmployeeTasks => "/employee/tasks".to_owned(),
            Self::EmployeeTask(id) => format!("/employee/tasks/{id}"),
            Self::EmployeeDocuments => "/employee/documents".to_owned(),
            Self::EmployeeProfile => "/employee/profile".to_owned(),
            Self::EmployeeSupport => "/employee/support".to_owned(),
            Self::HrDashboard => "/hr/dashboard".to_owned(),
            Self::HrEmployees => "/hr/employees".to_owned(),
            Self::HrTaskTemplates => "/hr/task-templates".to_owned(),
            Self::HrReports => "/hr/reports".to_owned(),
            Self::OfficeMap => "/office-map".to_owned(),
            Self::HolidayCalendar => "/holiday-calendar".to_owned(),
            Self::CompanyPolicies => "/company-policies".to_owned(),
            Self::NotFound => "/404".to_owned(),
        }
    }

    /// Role the route guard demands; `None` for public pages.
    #[must_use]
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::Landing | Self::Login | Self::NotFound => None,
            Self::HrDashboard | Self::HrEmployees | Self::HrTaskTemplates | Self::HrReports => Some(Role::Hr),
            Self::EmployeeDashboard
            | Self::EmployeeTasks
            | Self::EmployeeTask(_)
            | Self::EmployeeDocuments
            | Self::EmployeeProfile
            | Self::EmployeeSupport
            | Self::OfficeMap
            | Self::HolidayCalendar
            | Self::CompanyPolicies => Some(Role::Employee),
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "Welcome",
            Self::Login => "Login",
            Self::EmployeeDashboard | Self::HrDashboard => "Dashboard",
            Self::EmployeeTasks => "My Tasks",
            Self::EmployeeTask(_) => "Task",
            Self::EmployeeDocuments => "Documents",
            Self::EmployeeProfile => "My Profile",
            Self::EmployeeSupport => "Support",
            Self::HrEmployees => "Employees",
            Self::HrTaskTemplates => "Task Templates",
            Self::HrReports => "Reports",
            Self::OfficeMap => "Office Map",
            Self::HolidayCalendar => "Holiday Calendar",
            Self::CompanyPolicies => "Company Policies",
            Self::NotFound => "Page Not Found",
        }
    }
}

/// Sidebar entries for `role`, in display order.
#[must_use]
pub fn nav_items(role: Role) -> Vec<AppRoute> {
    match role {
        Role::Employee => vec![
            AppRoute::EmployeeDashboard,
            AppRoute::EmployeeTasks,
            AppRoute::EmployeeDocuments,
            AppRoute::EmployeeProfile,
            AppRoute::EmployeeSupport,
        ],
        Role::Hr => vec![
            AppRoute::HrDashboard,
            AppRoute::HrEmployees,
            AppRoute::HrTaskTemplates,
            AppRoute::HrReports,
        ],
    }
}

/// Resource pages linked from the employee sidebar footer.
#[must_use]
pub fn resource_items() -> Vec<AppRoute> {
    vec![AppRoute::OfficeMap, AppRoute::HolidayCalendar, AppRoute::CompanyPolicies]
}

/// Guard decision for the page at `path`. Paths the table marks public are allowed.
#[must_use]
pub fn guard_path(path: &str, session: Option<&Session>) -> GuardDecision {
    match AppRoute::resolve(path).required_role() {
        Some(required) => guard::evaluate(session, required),
        None => GuardDecision::Allow,
    }
}
