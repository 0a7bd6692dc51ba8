//! Create, title update, and delete against the remote service.

use super::{CreateTaskRejected, TaskBoard, TaskBoardConfig, TaskServiceResult};
use crate::task::{
    domain::{NewTask, Task, TaskAction, TaskId},
    ports::{NotificationKind, Notifier, TaskRemote},
};
use std::sync::Arc;

/// Applies confirmed task mutations to the board.
///
/// Nothing is changed locally until the remote call succeeds.
pub struct TaskMutationService<R, N>
where
    R: TaskRemote,
    N: Notifier,
{
    board: TaskBoard,
    remote: Arc<R>,
    notifier: Arc<N>,
    config: TaskBoardConfig,
}

impl<R, N> Clone for TaskMutationService<R, N>
where
    R: TaskRemote,
    N: Notifier,
{
    fn clone(&self) -> Self {
        Self {
            board: self.board.clone(),
            remote: Arc::clone(&self.remote),
            notifier: Arc::clone(&self.notifier),
            config: self.config.clone(),
        }
    }
}

impl<R, N> TaskMutationService<R, N>
where
    R: TaskRemote,
    N: Notifier,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(board: TaskBoard, remote: Arc<R>, notifier: Arc<N>) -> Self {
        Self::with_config(board, remote, notifier, TaskBoardConfig::default())
    }

    /// Creates a service with a custom configuration.
    #[must_use]
    pub const fn with_config(
        board: TaskBoard,
        remote: Arc<R>,
        notifier: Arc<N>,
        config: TaskBoardConfig,
    ) -> Self {
        Self {
            board,
            remote,
            notifier,
            config,
        }
    }

    /// Returns the board this service mutates.
    #[must_use]
    pub const fn board(&self) -> &TaskBoard {
        &self.board
    }

    /// Updates a task's title.
    ///
    /// The record returned by the server replaces the local one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Remote`](super::TaskServiceError::Remote)
    /// when the request fails. The board is left unchanged and no
    /// notification is sent.
    pub async fn update_title(&self, id: TaskId, title: &str) -> TaskServiceResult<Task> {
        tracing::debug!(task = %id, "updating task title");
        let updated = self.remote.update_title(id, title).await.inspect_err(|err| {
            tracing::warn!(task = %id, error = %err, "task title update failed");
        })?;
        self.board.dispatch(TaskAction::TitleUpdated(updated.clone()));
        Ok(updated)
    }

    /// Creates a task and appends it to its column.
    ///
    /// The loading flag is raised for the duration of the request, and the
    /// lifecycle returns to idle once the outcome is handed back. On
    /// success the creation dialog is closed and a success notification is
    /// sent.
    ///
    /// # Errors
    ///
    /// Returns [`CreateTaskRejected`] with the failure message. No
    /// notification is sent for a rejection.
    pub async fn create_task(&self, task: NewTask) -> Result<Task, CreateTaskRejected> {
        tracing::debug!(column = %task.column, "creating task");
        self.board.dispatch(TaskAction::CreatePending);
        match self.remote.create_task(&task).await {
            Ok(created) => {
                tracing::debug!(task = %created.id(), column = %created.column(), "task created");
                self.board
                    .dispatch(TaskAction::CreateFulfilled(created.clone()));
                self.notifier
                    .notify(NotificationKind::Success, &self.config.task_created);
                self.board.dispatch(TaskAction::CreateAcknowledged);
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(column = %task.column, error = %err, "task creation failed");
                self.board.dispatch(TaskAction::CreateRejected);
                self.board.dispatch(TaskAction::CreateAcknowledged);
                Err(CreateTaskRejected::from(err))
            }
        }
    }

    /// Deletes a task from the server and then from the board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Remote`](super::TaskServiceError::Remote)
    /// when the request fails. The board is left unchanged.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        tracing::debug!(task = %id, "deleting task");
        self.remote.delete_task(id).await.inspect_err(|err| {
            tracing::warn!(task = %id, error = %err, "task deletion failed");
        })?;
        self.board.dispatch(TaskAction::Deleted(id));
        self.notifier
            .notify(NotificationKind::Info, &self.config.task_deleted);
        Ok(())
    }
}
