//! Shared handle to the task store.

use crate::task::domain::{BoardId, ColumnId, ColumnOrder, TaskAction, TaskStore};
use std::sync::{Arc, PoisonError, RwLock};

/// Cloneable handle through which services and the host read and update
/// one [`TaskStore`].
///
/// Each dispatch runs to completion under the lock and the lock is never
/// held across a remote call, so no reader observes a half-applied action.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    store: Arc<RwLock<TaskStore>>,
}

impl TaskBoard {
    /// Creates a handle to an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an action to the store.
    pub fn dispatch(&self, action: TaskAction) {
        self.store
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(action);
    }

    /// Applies `order` and returns the order it replaced together with the
    /// current board, all under one write lock.
    pub fn swap_column_order(&self, order: ColumnOrder) -> (ColumnOrder, Option<BoardId>) {
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        let previous = store.swap_column_order(order);
        (previous, store.board())
    }

    /// Reads the store through a closure.
    pub fn read<T>(&self, f: impl FnOnce(&TaskStore) -> T) -> T {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Returns a deep copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> TaskStore {
        self.read(TaskStore::clone)
    }

    /// Returns `true` while a create request is outstanding.
    #[must_use]
    pub fn create_loading(&self) -> bool {
        self.read(TaskStore::create_loading)
    }

    /// Opens the creation dialog targeting `column`.
    pub fn open_create_dialog(&self, column: ColumnId) {
        self.dispatch(TaskAction::SetDialogColumn(column));
        self.dispatch(TaskAction::SetDialogOpen(true));
    }

    /// Closes the creation dialog.
    pub fn close_create_dialog(&self) {
        self.dispatch(TaskAction::SetDialogOpen(false));
    }
}
