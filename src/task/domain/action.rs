//! Commands accepted by [`TaskStore::apply`](super::TaskStore::apply).

use super::{BoardPayload, ColumnId, ColumnOrder, Task, TaskId};

/// A state transition of the task store.
///
/// Every change to the store goes through one of these variants so the
/// transition table is a single exhaustive match.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskAction {
    /// Replace all state from a freshly fetched board.
    Seed(BoardPayload),
    /// Replace the per-column ordering wholesale.
    SetColumnOrder(ColumnOrder),
    /// Put back an earlier ordering, reconciled against the current records.
    RestoreColumnOrder(ColumnOrder),
    /// The server confirmed a title update.
    TitleUpdated(Task),
    /// A create request was sent.
    CreatePending,
    /// The server created a task.
    CreateFulfilled(Task),
    /// A create request failed.
    CreateRejected,
    /// The outcome of the last create has been consumed by the caller.
    CreateAcknowledged,
    /// The server deleted a task.
    Deleted(TaskId),
    /// Open or close the creation dialog.
    SetDialogOpen(bool),
    /// Choose the column the creation dialog targets.
    SetDialogColumn(ColumnId),
}
