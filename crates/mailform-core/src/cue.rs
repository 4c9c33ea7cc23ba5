//! Side-channel feedback cue.

/// Fire-and-forget feedback triggered whenever a notification is shown.
///
/// Implementations must be best-effort: a cue that cannot play (headless
/// session, missing notification daemon) stays silent instead of failing
/// the submission flow.
pub trait Cue {
    /// Triggers the cue.
    fn notify(&self);
}

/// Cue backed by the desktop notification service.
///
/// Emits a short notification carrying the standard incoming-message sound.
/// Errors are logged at debug level and otherwise swallowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCue;

impl Cue for SystemCue {
    fn notify(&self) {
        let result = notify_rust::Notification::new()
            .appname("mailform")
            .summary("mailform")
            .sound_name("message-new-instant")
            .show();

        if let Err(e) = result {
            tracing::debug!("cue unavailable: {e}");
        }
    }
}
