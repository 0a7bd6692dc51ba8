//! Notifier that records every notification it receives.

use crate::task::ports::{NotificationKind, Notifier};
use std::sync::{Arc, PoisonError, RwLock};

/// A notification captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub kind: NotificationKind,
    /// Message text.
    pub message: String,
}

impl Notification {
    /// Creates a notification value.
    #[must_use]
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Thread-safe notifier that keeps notifications in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notification received so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.received
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.received
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notification::new(kind, message));
    }
}
