//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome and shared cards while reading/writing
//! shared state from Leptos context providers.

pub mod layout;
pub mod navbar;
pub mod notice;
pub mod notification_panel;
pub mod progress_bar;
pub mod protected_route;
pub mod sidebar;
pub mod task_card;
