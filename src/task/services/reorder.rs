//! Optimistic reordering with rollback.

use super::{TaskBoard, TaskBoardConfig};
use crate::task::{
    domain::{ColumnOrder, TaskAction},
    ports::{NotificationKind, Notifier, RemoteRequestFailure, SortTasksRequest, TaskRemote},
};
use std::sync::Arc;

/// Final state of one reorder call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The server accepted the new order, which stays applied.
    Reconciled,
    /// The server rejected the new order and the previous one was restored.
    RolledBack(RemoteRequestFailure),
}

impl ReorderOutcome {
    /// Returns `true` when the new order was kept.
    #[must_use]
    pub const fn is_reconciled(&self) -> bool {
        matches!(self, Self::Reconciled)
    }
}

/// Applies a new column order immediately and persists it in the
/// background of the caller's await.
///
/// Each call swaps in its order and takes the snapshot in one step.
/// Overlapping calls are not serialised: a call that fails after a later
/// call has applied its order restores its own, older snapshot.
pub struct ReorderCoordinator<R, N>
where
    R: TaskRemote,
    N: Notifier,
{
    board: TaskBoard,
    remote: Arc<R>,
    notifier: Arc<N>,
    config: TaskBoardConfig,
}

impl<R, N> Clone for ReorderCoordinator<R, N>
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

impl<R, N> ReorderCoordinator<R, N>
where
    R: TaskRemote,
    N: Notifier,
{
    /// Creates a coordinator with the default configuration.
    #[must_use]
    pub fn new(board: TaskBoard, remote: Arc<R>, notifier: Arc<N>) -> Self {
        Self::with_config(board, remote, notifier, TaskBoardConfig::default())
    }

    /// Creates a coordinator with a custom configuration.
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

    /// Replaces the column order, persists it, and rolls back on failure.
    ///
    /// The new order is visible on the board before the request is sent.
    /// A success notification follows acceptance; on rejection the previous
    /// order is restored and an error notification carries the failure
    /// message. Tasks created or deleted while the request was outstanding
    /// are kept or left out of the restored order so it still matches the
    /// records.
    pub async fn reorder(&self, order: ColumnOrder) -> ReorderOutcome {
        let (previous, board_id) = self.board.swap_column_order(order.clone());

        let request = SortTasksRequest::new(board_id, order);
        tracing::debug!(
            board = ?board_id,
            columns = request.tasks.len(),
            tasks = request.order.len(),
            "persisting task order"
        );
        match self.remote.sort_tasks(&request).await {
            Ok(()) => {
                self.notifier
                    .notify(NotificationKind::Success, &self.config.tasks_ordered);
                ReorderOutcome::Reconciled
            }
            Err(err) => {
                tracing::warn!(board = ?board_id, error = %err, "task order rejected, rolling back");
                self.board
                    .dispatch(TaskAction::RestoreColumnOrder(previous));
                self.notifier
                    .notify(NotificationKind::Error, err.message());
                ReorderOutcome::RolledBack(err)
            }
        }
    }
}
