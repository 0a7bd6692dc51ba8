//! Board payloads and per-column task ordering.

use super::{BoardId, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Ordered task identifiers for every column.
///
/// Columns iterate in ascending identifier order. The flattened ranking
/// sent to the server visits columns in that same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnOrder(BTreeMap<ColumnId, Vec<TaskId>>);

impl ColumnOrder {
    /// Creates an empty ordering.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the ordered task ids of a column, if the column is known.
    #[must_use]
    pub fn column(&self, column: ColumnId) -> Option<&[TaskId]> {
        self.0.get(&column).map(Vec::as_slice)
    }

    /// Replaces the sequence of a column.
    pub fn set_column(&mut self, column: ColumnId, tasks: impl IntoIterator<Item = TaskId>) {
        self.0.insert(column, tasks.into_iter().collect());
    }

    /// Appends a task to the end of a column, creating the column if absent.
    pub fn push(&mut self, column: ColumnId, task: TaskId) {
        self.0.entry(column).or_default().push(task);
    }

    /// Removes every occurrence of `task` from every column.
    ///
    /// Returns `true` when at least one occurrence was removed.
    pub fn remove(&mut self, task: TaskId) -> bool {
        let mut removed = false;
        for tasks in self.0.values_mut() {
            let before = tasks.len();
            tasks.retain(|id| *id != task);
            removed |= tasks.len() != before;
        }
        removed
    }

    /// Keeps only the ids for which `keep` returns `true`, dropping
    /// repeated occurrences of an id after its first.
    pub fn retain(&mut self, mut keep: impl FnMut(TaskId) -> bool) {
        let mut seen = HashSet::new();
        for tasks in self.0.values_mut() {
            tasks.retain(|id| keep(*id) && seen.insert(*id));
        }
    }

    /// Returns the column whose sequence contains `task`.
    #[must_use]
    pub fn column_of(&self, task: TaskId) -> Option<ColumnId> {
        self.0
            .iter()
            .find(|(_, tasks)| tasks.contains(&task))
            .map(|(column, _)| *column)
    }

    /// Iterates over columns and their sequences in column order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnId, &[TaskId])> {
        self.0.iter().map(|(column, tasks)| (*column, tasks.as_slice()))
    }

    /// Concatenates every column's sequence into one total ordering.
    #[must_use]
    pub fn flattened(&self) -> Vec<TaskId> {
        self.0.values().flatten().copied().collect()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no column is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<I> FromIterator<(ColumnId, I)> for ColumnOrder
where
    I: IntoIterator<Item = TaskId>,
{
    fn from_iter<T: IntoIterator<Item = (ColumnId, I)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(column, tasks)| (column, tasks.into_iter().collect()))
                .collect(),
        )
    }
}

/// A column as delivered by the board fetch, with its tasks in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnPayload {
    /// Column identifier.
    pub id: ColumnId,
    /// Tasks in display order.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl ColumnPayload {
    /// Creates a column payload.
    #[must_use]
    pub const fn new(id: ColumnId, tasks: Vec<Task>) -> Self {
        Self { id, tasks }
    }
}

/// A fetched board: its identifier and ordered columns with nested tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardPayload {
    /// Board identifier.
    pub id: BoardId,
    /// Columns in board order.
    #[serde(default)]
    pub columns: Vec<ColumnPayload>,
}

impl BoardPayload {
    /// Creates a board payload.
    #[must_use]
    pub const fn new(id: BoardId, columns: Vec<ColumnPayload>) -> Self {
        Self { id, columns }
    }
}
