//! Remote persistence port for task mutations and ordering.

use crate::task::domain::{BoardId, ColumnOrder, NewTask, Task, TaskId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for remote requests.
pub type RemoteResult<T> = Result<T, RemoteRequestFailure>;

/// Remote persistence contract.
///
/// Every method is a suspension point: services release the store before
/// awaiting and re-enter it with the outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRemote: Send + Sync {
    /// Partially updates a task's title.
    ///
    /// The returned record is authoritative and need not echo `title`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteRequestFailure`] on any non-success response.
    async fn update_title(&self, id: TaskId, title: &str) -> RemoteResult<Task>;

    /// Creates a task and returns the stored record with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteRequestFailure`] on any non-success response.
    async fn create_task(&self, task: &NewTask) -> RemoteResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteRequestFailure`] on any non-success response.
    async fn delete_task(&self, id: TaskId) -> RemoteResult<()>;

    /// Persists the ordering of every column.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteRequestFailure`] when the server rejects the order.
    async fn sort_tasks(&self, request: &SortTasksRequest) -> RemoteResult<()>;
}

/// Body of a persist-order request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortTasksRequest {
    /// Board the columns belong to, if one is loaded.
    pub board: Option<BoardId>,
    /// Full column-to-tasks mapping.
    pub tasks: ColumnOrder,
    /// Every column's sequence concatenated in column order, giving each
    /// task a single global rank.
    pub order: Vec<TaskId>,
}

impl SortTasksRequest {
    /// Builds a request, deriving the flattened order from `tasks`.
    #[must_use]
    pub fn new(board: Option<BoardId>, tasks: ColumnOrder) -> Self {
        let order = tasks.flattened();
        Self {
            board,
            tasks,
            order,
        }
    }
}

/// Any non-success response or transport failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteRequestFailure {
    message: String,
}

impl RemoteRequestFailure {
    /// Creates a failure with a human-readable message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
