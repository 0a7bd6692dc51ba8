//! Notifier that forwards notifications to `tracing`.

use crate::task::ports::{NotificationKind, Notifier};

/// Emits each notification as a `tracing` event under the
/// `taskboard::notify` target.
///
/// Success and info notifications are logged at `INFO`, errors at `WARN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates the notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!(target: "taskboard::notify", kind = kind.as_str(), "{message}");
            }
            NotificationKind::Error => {
                tracing::warn!(target: "taskboard::notify", kind = kind.as_str(), "{message}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TracingNotifier;
    use crate::task::ports::{NotificationKind, Notifier};
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn notifications_become_events() {
        let notifier = TracingNotifier::new();
        notifier.notify(NotificationKind::Success, "Tasks ordered");
        notifier.notify(NotificationKind::Error, "Network Error");

        assert!(logs_contain("Tasks ordered"));
        assert!(logs_contain("WARN"));
        assert!(logs_contain("Network Error"));
    }
}
