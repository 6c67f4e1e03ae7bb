use super::*;

fn note(id: &'static str, read: bool) -> Notification {
    Notification { id, title: "t", message: "m", date: "2025-05-01", read }
}

#[test]
fn seeded_feed_has_unread_items_and_starts_closed() {
    let state = NotificationsState::seeded();
    assert_eq!(state.unread_count(), 2);
    assert!(!state.open);
}

#[test]
fn empty_feed_has_nothing_unread() {
    assert_eq!(NotificationsState::default().unread_count(), 0);
}

#[test]
fn mark_read_clears_only_that_item() {
    let mut state = NotificationsState { items: vec![note("a", false), note("b", false)], open: true };
    assert!(state.mark_read("a"));
    assert_eq!(state.unread_count(), 1);
    assert!(state.items[0].read);
    assert!(!state.items[1].read);
}

#[test]
fn mark_read_is_idempotent() {
    let mut state = NotificationsState { items: vec![note("a", false)], open: false };
    assert!(state.mark_read("a"));
    assert!(state.mark_read("a"));
    assert_eq!(state.unread_count(), 0);
}

#[test]
fn mark_read_unknown_id_changes_nothing() {
    let mut state = NotificationsState::seeded();
    let before = state.clone();
    assert!(!state.mark_read("missing"));
    assert_eq!(state, before);
}

#[test]
fn mark_all_read_zeroes_the_badge() {
    let mut state = NotificationsState::seeded();
    state.mark_all_read();
    assert_eq!(state.unread_count(), 0);
    assert_eq!(state.items.len(), 4);
}

#[test]
fn toggle_open_flips() {
    let mut state = NotificationsState::default();
    state.toggle_open();
    assert!(state.open);
    state.toggle_open();
    assert!(!state.open);
}
