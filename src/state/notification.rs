//! "Project coming soon" notification lifecycle.
//!
//! At most one notification is visible. Each `show` bumps a sequence number
//! so a timer armed for an earlier notification cannot dismiss a newer one.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// The notification currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub project_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationState {
    current: Option<Notice>,
    last_seq: u64,
    auto_dismiss_ms: u32,
}

impl NotificationState {
    #[must_use]
    pub fn new(auto_dismiss_ms: u32) -> Self {
        Self { current: None, last_seq: 0, auto_dismiss_ms }
    }

    /// Delay before the timer armed by `show` closes the notification.
    #[must_use]
    pub fn auto_dismiss_ms(&self) -> u32 {
        self.auto_dismiss_ms
    }

    #[cfg(test)]
    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Show a notification for `project_name`, replacing any visible one.
    /// The returned sequence number keys its auto-dismiss timer.
    pub fn show(&mut self, project_name: impl Into<String>) -> u64 {
        self.last_seq += 1;
        self.current = Some(Notice { seq: self.last_seq, project_name: project_name.into() });
        self.last_seq
    }

    /// Explicit close, overlay click or Escape.
    pub fn dismiss(&mut self) -> Option<Notice> {
        self.current.take()
    }

    /// Auto-dismiss path: only closes the notification `seq` was issued for.
    pub fn dismiss_if_current(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|notice| notice.seq == seq) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[must_use]
pub fn coming_soon_message(project_name: &str) -> String {
    format!("{project_name} will be available soon. Stay tuned for updates!")
}
