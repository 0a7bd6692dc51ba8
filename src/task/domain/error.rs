//! Invariant violations detected in the task store.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// A broken consistency rule between `by_id` and `by_column`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A column lists a task that has no record.
    #[error("task {task} is listed in column {column} but has no record")]
    MissingRecord {
        /// Listed task.
        task: TaskId,
        /// Column listing it.
        column: ColumnId,
    },

    /// A record is not listed in any column.
    #[error("task {0} has a record but is not listed in any column")]
    Unlisted(TaskId),

    /// A task is listed more than once across all columns.
    #[error("task {0} is listed more than once")]
    ListedTwice(TaskId),

    /// A record names a different column from the one listing it.
    #[error("task {task} is listed in column {listed} but its record names column {recorded}")]
    ColumnMismatch {
        /// Affected task.
        task: TaskId,
        /// Column whose sequence contains the task.
        listed: ColumnId,
        /// Column stored on the record.
        recorded: ColumnId,
    },
}
