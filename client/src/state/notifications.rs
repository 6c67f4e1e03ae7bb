//! Navbar notification feed.
//!
//! Read flags are local to the browser tab; nothing is sent anywhere. The
//! feed is provided from the app shell so it survives page navigation.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::fixtures;
use crate::net::types::Notification;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    /// Whether the popover is showing.
    pub open: bool,
}

impl NotificationsState {
    #[must_use]
    pub fn seeded() -> Self {
        Self { items: fixtures::notifications(), open: false }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Mark one notification read. Returns false for an unknown id.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }
}
