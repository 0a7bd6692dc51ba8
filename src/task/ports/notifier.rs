//! Notification port consumed as a fire-and-forget sink.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// An operation completed.
    Success,
    /// An operation failed.
    Error,
    /// Neutral information.
    Info,
}

impl NotificationKind {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives notifications. Nothing is returned to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Shows a notification.
    fn notify(&self, kind: NotificationKind, message: &str);
}
