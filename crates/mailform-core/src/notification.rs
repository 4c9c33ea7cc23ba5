//! Single-slot transient notifications.

/// Severity of a notification, determining its visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The submission went through.
    Success,
    /// Something prevented the submission.
    Error,
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Whether the notification is currently visible.
    pub open: bool,
    /// Severity.
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            open: false,
            kind: NotificationKind::Success,
            message: String::new(),
        }
    }
}

/// Owner of the single notification slot.
///
/// Later `show` calls replace the current notification outright; there is
/// no queue, no stacking and no history. Dismissal only clears the `open`
/// flag, keeping the last message around for exit-transition rendering.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Notification,
}

impl NotificationCenter {
    /// Creates a center with nothing to show.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current notification and marks it open.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.current = Notification {
            open: true,
            kind,
            message: message.into(),
        };
    }

    /// Hides the current notification, keeping its content.
    ///
    /// Safe to call repeatedly.
    pub fn dismiss(&mut self) {
        self.current.open = false;
    }

    /// Read access for the rendering boundary.
    #[must_use]
    pub const fn current(&self) -> &Notification {
        &self.current
    }
}
