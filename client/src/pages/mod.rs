//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Role checks happen in `ProtectedRoute` before a page
//! renders, never inside the page.

pub mod employee;
pub mod hr;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod resources;
