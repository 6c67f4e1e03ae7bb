//! Local UI chrome state: theme and the transient notice banner.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of auth state so notices and theme can
//! change without re-running route guards.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short user-facing message, e.g. a validation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    /// Bumped on every push so an auto-dismiss timer only clears its own notice.
    pub seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub notice: Option<Notice>,
    pub notice_seq: u64,
}

impl UiState {
    /// Replace the current notice and return its sequence number.
    pub fn push_notice(&mut self, kind: NoticeKind, title: &str, message: &str) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice {
            kind,
            title: title.to_owned(),
            message: message.to_owned(),
            seq: self.notice_seq,
        });
        self.notice_seq
    }

    pub fn success(&mut self, title: &str, message: &str) -> u64 {
        self.push_notice(NoticeKind::Success, title, message)
    }

    pub fn error(&mut self, message: &str) -> u64 {
        self.push_notice(NoticeKind::Error, "Error", message)
    }

    /// Clear the notice only if it is still the one numbered `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}
