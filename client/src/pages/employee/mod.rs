//! Employee-only pages. Routed behind `ProtectedRoute role=Role::Employee`.

pub mod dashboard;
pub mod documents;
pub mod profile;
pub mod support;
pub mod task_detail;
pub mod tasks;
