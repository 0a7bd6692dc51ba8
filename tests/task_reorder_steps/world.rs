//! Shared world state for task reordering BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::{InMemoryTaskRemote, RecordingNotifier},
    domain::{ColumnId, TaskId},
    services::{BoardSync, ReorderCoordinator, ReorderOutcome, TaskBoard},
};

/// Scenario world for reordering behaviour tests.
pub struct ReorderWorld {
    pub board: TaskBoard,
    pub remote: InMemoryTaskRemote,
    pub notifier: RecordingNotifier,
    pub sync: BoardSync<InMemoryTaskRemote>,
    pub coordinator: ReorderCoordinator<InMemoryTaskRemote, RecordingNotifier>,
    pub last_outcome: Option<ReorderOutcome>,
}

impl ReorderWorld {
    /// Creates a world with an empty remote and store.
    #[must_use]
    pub fn new() -> Self {
        let remote = InMemoryTaskRemote::new();
        let notifier = RecordingNotifier::new();
        let board = TaskBoard::new();
        let shared_remote = Arc::new(remote.clone());

        Self {
            sync: BoardSync::new(board.clone(), Arc::clone(&shared_remote)),
            coordinator: ReorderCoordinator::new(
                board.clone(),
                shared_remote,
                Arc::new(notifier.clone()),
            ),
            board,
            remote,
            notifier,
            last_outcome: None,
        }
    }

    /// Returns the task ids currently listed in a column.
    #[must_use]
    pub fn column(&self, column: u64) -> Vec<TaskId> {
        self.board.read(|store| {
            store
                .column_order()
                .column(ColumnId::new(column))
                .map(<[TaskId]>::to_vec)
                .unwrap_or_default()
        })
    }
}

impl Default for ReorderWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReorderWorld {
    ReorderWorld::default()
}

/// Parses a comma-separated list of task ids.
pub fn parse_ids(list: &str) -> Result<Vec<TaskId>, eyre::Report> {
    list.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>()
                .map(TaskId::new)
                .map_err(|err| eyre::eyre!("invalid task id '{part}': {err}"))
        })
        .collect()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
