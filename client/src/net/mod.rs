//! Onboarding data: record types, mock fixtures, and the simulated API.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend. `fixtures` supplies the read-only collections pages
//! render, and `mock_api` stands in for the few "submit" calls with async
//! functions that can later be pointed at a real service.

pub mod fixtures;
pub mod mock_api;
pub mod types;
