use std::time::{Duration, Instant};

/// How long a notification stays on screen
const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Debug)]
struct Active {
    message: String,
    kind: NotificationKind,
    expires_at: Instant,
}

/// One notification at a time; a new message replaces the current one and
/// restarts the dismiss timer.
#[derive(Debug, Default)]
pub struct NotificationState {
    active: Option<Active>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str, kind: NotificationKind, now: Instant) {
        self.active = Some(Active {
            message: message.to_string(),
            kind,
            expires_at: now + DISMISS_AFTER,
        });
    }

    pub fn success(&mut self, message: &str, now: Instant) {
        self.show(message, NotificationKind::Success, now);
    }

    pub fn error(&mut self, message: &str, now: Instant) {
        self.show(message, NotificationKind::Error, now);
    }

    /// Drop the message once its dismiss deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if let Some(active) = &self.active {
            if now >= active.expires_at {
                self.active = None;
            }
        }
    }

    pub fn current(&self) -> Option<(&str, NotificationKind)> {
        self.active
            .as_ref()
            .map(|active| (active.message.as_str(), active.kind))
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
