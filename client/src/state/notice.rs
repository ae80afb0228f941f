//! The single dismissible alert shown over the console.
//!
//! DESIGN
//! ======
//! Only one notice is visible at a time; raising a new one replaces the
//! old. Each notice gets a fresh id so an auto-dismiss timer started for an
//! earlier notice cannot close a later one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    last_id: u64,
}

impl NoticeState {
    /// Show `message` as a success notice and return its id.
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.raise(NoticeKind::Success, message.into())
    }

    /// Show `message` as an error notice and return its id.
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.raise(NoticeKind::Error, message.into())
    }

    /// Close notice `id` if it is still the one showing.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    fn raise(&mut self, kind: NoticeKind, message: String) -> u64 {
        self.last_id += 1;
        self.current = Some(Notice { id: self.last_id, kind, message });
        self.last_id
    }
}
