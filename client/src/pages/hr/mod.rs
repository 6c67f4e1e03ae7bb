//! HR-only pages. Routed behind `ProtectedRoute role=Role::Hr`.

pub mod dashboard;
pub mod employees;
pub mod reports;
pub mod task_templates;
