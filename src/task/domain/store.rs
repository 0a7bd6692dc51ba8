//! In-memory task store: records by id plus ordered ids per column.

use super::{
    BoardId, BoardPayload, ColumnId, ColumnOrder, CreateLifecycle, InvariantViolation, Task,
    TaskAction, TaskId,
};
use std::collections::{HashMap, HashSet};

/// State of the task creation dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateDialog {
    /// Whether the dialog is shown.
    pub open: bool,
    /// Column new tasks are created in, once one has been chosen.
    pub column: Option<ColumnId>,
}

/// Authoritative local copy of a board's tasks.
///
/// The store has no network awareness. Services read it, talk to the
/// remote, and feed the outcome back through [`TaskStore::apply`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    board: Option<BoardId>,
    by_id: HashMap<TaskId, Task>,
    by_column: ColumnOrder,
    create: CreateLifecycle,
    dialog: CreateDialog,
}

impl TaskStore {
    /// Creates an empty store with no board loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a single state transition.
    pub fn apply(&mut self, action: TaskAction) {
        match action {
            TaskAction::Seed(payload) => self.seed(payload),
            TaskAction::SetColumnOrder(order) => self.set_column_order(order),
            TaskAction::RestoreColumnOrder(order) => self.restore_column_order(order),
            TaskAction::TitleUpdated(task) => self.upsert_task(task),
            TaskAction::CreatePending => self.create.begin(),
            TaskAction::CreateFulfilled(task) => {
                self.by_column.push(task.column(), task.id());
                self.upsert_task(task);
                self.dialog.open = false;
                self.create.fulfil();
            }
            TaskAction::CreateRejected => self.create.reject(),
            TaskAction::CreateAcknowledged => self.create.acknowledge(),
            TaskAction::Deleted(id) => self.remove_task(id),
            TaskAction::SetDialogOpen(open) => self.dialog.open = open,
            TaskAction::SetDialogColumn(column) => self.dialog.column = Some(column),
        }
    }

    /// Replaces the board, records, and ordering from a fetched payload.
    ///
    /// Tasks keep their input order within each column. Prior state is
    /// discarded rather than merged.
    pub fn seed(&mut self, payload: BoardPayload) {
        let mut by_id = HashMap::new();
        let mut by_column = ColumnOrder::new();
        for column in payload.columns {
            by_column.set_column(column.id, column.tasks.iter().map(Task::id));
            by_id.extend(column.tasks.into_iter().map(|task| (task.id(), task)));
        }
        self.board = Some(payload.id);
        self.by_id = by_id;
        self.by_column = by_column;
    }

    /// Inserts or overwrites a record. Column sequences are left untouched.
    pub fn upsert_task(&mut self, task: Task) {
        self.by_id.insert(task.id(), task);
    }

    /// Removes a record and its occurrence in whichever column lists it.
    ///
    /// Unknown ids are ignored.
    pub fn remove_task(&mut self, id: TaskId) {
        self.by_column.remove(id);
        self.by_id.remove(&id);
    }

    /// Replaces the per-column ordering wholesale.
    pub fn set_column_order(&mut self, order: ColumnOrder) {
        self.by_column = order;
    }

    /// Replaces the per-column ordering and returns the one it replaced.
    pub fn swap_column_order(&mut self, order: ColumnOrder) -> ColumnOrder {
        std::mem::replace(&mut self.by_column, order)
    }

    /// Restores an earlier ordering without resurrecting or losing records.
    ///
    /// Ids whose record has since been removed are dropped. Records the
    /// ordering does not list are appended to the column their record
    /// names, in id order.
    pub fn restore_column_order(&mut self, mut order: ColumnOrder) {
        order.retain(|id| self.by_id.contains_key(&id));
        let mut unlisted: Vec<&Task> = self
            .by_id
            .values()
            .filter(|task| order.column_of(task.id()).is_none())
            .collect();
        unlisted.sort_by_key(|task| task.id());
        for task in unlisted {
            order.push(task.column(), task.id());
        }
        self.by_column = order;
    }

    /// Returns the board the store was last seeded from.
    #[must_use]
    pub const fn board(&self) -> Option<BoardId> {
        self.board
    }

    /// Looks up a record.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.by_id.get(&id)
    }

    /// Returns all records keyed by id.
    #[must_use]
    pub const fn tasks(&self) -> &HashMap<TaskId, Task> {
        &self.by_id
    }

    /// Returns the per-column ordering.
    #[must_use]
    pub const fn column_order(&self) -> &ColumnOrder {
        &self.by_column
    }

    /// Returns the records of a column in display order.
    #[must_use]
    pub fn column_tasks(&self, column: ColumnId) -> Vec<&Task> {
        self.by_column
            .column(column)
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .collect()
    }

    /// Returns `true` while a create request is outstanding.
    #[must_use]
    pub const fn create_loading(&self) -> bool {
        self.create.is_loading()
    }

    /// Returns the create lifecycle.
    #[must_use]
    pub const fn create_lifecycle(&self) -> CreateLifecycle {
        self.create
    }

    /// Returns the creation dialog state.
    #[must_use]
    pub const fn dialog(&self) -> CreateDialog {
        self.dialog
    }

    /// Checks that records and column sequences describe the same tasks.
    ///
    /// Every listed id must have a record, and every record must be listed
    /// exactly once.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::new();
        for (column, tasks) in self.by_column.iter() {
            for task in tasks {
                if !self.by_id.contains_key(task) {
                    return Err(InvariantViolation::MissingRecord {
                        task: *task,
                        column,
                    });
                }
                if !seen.insert(*task) {
                    return Err(InvariantViolation::ListedTwice(*task));
                }
            }
        }
        match self.by_id.keys().find(|id| !seen.contains(*id)) {
            Some(id) => Err(InvariantViolation::Unlisted(*id)),
            None => Ok(()),
        }
    }

    /// Checks that each record names the column listing it.
    ///
    /// Records carry the column last confirmed by the server. A reorder
    /// changes only the sequences, so after one this holds again once the
    /// board is reloaded.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::ColumnMismatch`] for the first
    /// disagreeing record.
    pub fn check_record_columns(&self) -> Result<(), InvariantViolation> {
        for (listed, tasks) in self.by_column.iter() {
            let mismatch = tasks
                .iter()
                .filter_map(|id| self.by_id.get(id))
                .find(|task| task.column() != listed);
            if let Some(task) = mismatch {
                return Err(InvariantViolation::ColumnMismatch {
                    task: task.id(),
                    listed,
                    recorded: task.column(),
                });
            }
        }
        Ok(())
    }
}
