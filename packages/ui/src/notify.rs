//! Single-slot notifications.
//!
//! A page shows at most one notice at a time; showing a new one replaces the
//! old one. Each notice gets an id so a delayed dismissal only removes the
//! notice it was scheduled for, never a newer one.

use std::time::Duration;

/// How long a notice stays up before it is dismissed.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    /// Advisory failures, e.g. an AI helper that is unavailable.
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: Level,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notifier {
    current: Option<Notice>,
    shown: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current notice. Returns the new notice's id.
    pub fn show(&mut self, level: Level, message: impl Into<String>) -> u64 {
        self.shown += 1;
        let notice = Notice {
            id: self.shown,
            level,
            message: message.into(),
        };
        tracing::debug!("notice {:?}: {}", notice.level, notice.message);
        self.current = Some(notice);
        self.shown
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(Level::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(Level::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.show(Level::Info, message)
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Remove the notice with `id` if it is still the one showing.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Number of notices shown since this notifier was created.
    pub fn shown(&self) -> u64 {
        self.shown
    }

    /// Replay the notice an action raised on a copy of this notifier.
    ///
    /// `before` is the copy as the action received it. The notice is shown
    /// again here, under a fresh id, so it never shares an id with a notice
    /// raised on this notifier in the meantime.
    pub fn absorb(&mut self, before: &Notifier, after: Notifier) {
        if after.shown == before.shown {
            return;
        }
        if let Some(notice) = after.current {
            self.show(notice.level, notice.message);
        }
    }
}
