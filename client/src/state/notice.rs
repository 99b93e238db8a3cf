//! Transient user notifications (success / failure).
//!
//! DESIGN
//! ======
//! Only the newest notice is shown. `seq` identifies it so a delayed
//! auto-dismiss cannot clear a notice that replaced the one it was armed for.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a notice stays visible in the browser.
pub const NOTICE_TTL_MS: u64 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    next_seq: u64,
}

impl NoticeState {
    pub fn push_success(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    fn push(&mut self, kind: NoticeKind, message: String) {
        self.next_seq += 1;
        self.current = Some(Notice { kind, message, seq: self.next_seq });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clear the current notice only if it is still the one identified by `seq`.
    pub fn dismiss_if_current(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
        }
    }
}
