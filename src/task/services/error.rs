//! Service-level error types.

use crate::task::ports::RemoteRequestFailure;
use thiserror::Error;

/// Errors surfaced by update, delete, and board loading.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskServiceError {
    /// The remote service rejected the request.
    #[error(transparent)]
    Remote(#[from] RemoteRequestFailure),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Rejection value of a failed create, carrying the failure message.
///
/// Create reports failures through this value instead of notifying, so the
/// host can react specifically, for example by keeping the dialog open.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct CreateTaskRejected {
    message: String,
}

impl CreateTaskRejected {
    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<RemoteRequestFailure> for CreateTaskRejected {
    fn from(failure: RemoteRequestFailure) -> Self {
        Self {
            message: failure.message().to_owned(),
        }
    }
}
