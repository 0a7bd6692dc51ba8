//! In-memory remote persistence service.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::Notify;

use crate::task::{
    domain::{BoardId, BoardPayload, ColumnId, ColumnPayload, NewTask, Task, TaskId},
    ports::{BoardSource, RemoteRequestFailure, RemoteResult, SortTasksRequest, TaskRemote},
};

/// A request received by [`InMemoryTaskRemote`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteRequest {
    /// Board fetch.
    FetchBoard(BoardId),
    /// Title update for a task.
    UpdateTitle(TaskId),
    /// Task creation with the requested title.
    CreateTask(String),
    /// Task deletion.
    DeleteTask(TaskId),
    /// Order persistence.
    SortTasks(SortTasksRequest),
}

/// Thread-safe in-memory stand-in for the remote task service.
///
/// Ids are assigned sequentially. Requests can be held at the service
/// boundary with [`hold_requests`](Self::hold_requests) so callers can
/// observe state while a request is outstanding, and the next response can
/// be forced to fail with [`fail_next`](Self::fail_next).
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRemote {
    state: Arc<RwLock<RemoteState>>,
    gate: Arc<RequestGate>,
}

#[derive(Debug, Default)]
struct RemoteState {
    boards: HashMap<BoardId, Vec<ColumnId>>,
    tasks: HashMap<TaskId, Task>,
    ranks: HashMap<TaskId, usize>,
    next_id: u64,
    fail_next: Option<String>,
    requests: Vec<RemoteRequest>,
}

#[derive(Debug, Default)]
struct RequestGate {
    held: AtomicBool,
    arrived: Notify,
    release: Notify,
}

impl RequestGate {
    async fn pass(&self) {
        if self.held.load(Ordering::SeqCst) {
            self.arrived.notify_one();
            self.release.notified().await;
        }
    }
}

impl InMemoryTaskRemote {
    /// Creates an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service holding the given board.
    #[must_use]
    pub fn with_board(board: BoardPayload) -> Self {
        let remote = Self::new();
        remote.insert_board(board);
        remote
    }

    /// Stores a board, its columns, and their tasks.
    ///
    /// Tasks are ranked in payload order.
    pub fn insert_board(&self, board: BoardPayload) {
        let mut state = write_state(&self.state);
        let mut columns = Vec::with_capacity(board.columns.len());
        for column in board.columns {
            columns.push(column.id);
            for task in column.tasks {
                let rank = state.ranks.len();
                state.next_id = state.next_id.max(task.id().value());
                state.ranks.insert(task.id(), rank);
                state.tasks.insert(task.id(), task);
            }
        }
        state.boards.insert(board.id, columns);
    }

    /// Makes the next request fail with `message`.
    pub fn fail_next(&self, message: impl Into<String>) {
        write_state(&self.state).fail_next = Some(message.into());
    }

    /// Holds every subsequent request until it is released.
    pub fn hold_requests(&self) {
        self.gate.held.store(true, Ordering::SeqCst);
    }

    /// Waits until a held request reaches the service.
    pub async fn wait_for_request(&self) {
        self.gate.arrived.notified().await;
    }

    /// Lets one held request proceed.
    pub fn release_request(&self) {
        self.gate.release.notify_one();
    }

    /// Stops holding requests. Requests already held still need releasing.
    pub fn stop_holding(&self) {
        self.gate.held.store(false, Ordering::SeqCst);
    }

    /// Returns the stored record for a task.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<Task> {
        read_state(&self.state).tasks.get(&id).cloned()
    }

    /// Returns the global rank of a task.
    #[must_use]
    pub fn rank(&self, id: TaskId) -> Option<usize> {
        read_state(&self.state).ranks.get(&id).copied()
    }

    /// Returns every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RemoteRequest> {
        read_state(&self.state).requests.clone()
    }

    /// Records a request and waits at the gate, then consumes any forced
    /// failure.
    async fn receive(&self, request: RemoteRequest) -> RemoteResult<()> {
        write_state(&self.state).requests.push(request);
        self.gate.pass().await;
        let forced = write_state(&self.state).fail_next.take();
        match forced {
            Some(message) => Err(RemoteRequestFailure::new(message)),
            None => Ok(()),
        }
    }
}

fn write_state(state: &RwLock<RemoteState>) -> std::sync::RwLockWriteGuard<'_, RemoteState> {
    state
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn read_state(state: &RwLock<RemoteState>) -> std::sync::RwLockReadGuard<'_, RemoteState> {
    state
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn normalized_title(title: &str) -> RemoteResult<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(RemoteRequestFailure::new("title: this field may not be blank"));
    }
    Ok(trimmed)
}

fn new_record(id: TaskId, task: &NewTask, title: &str) -> Task {
    let mut record = Task::new(id, title, task.column)
        .with_field("description", task.description.clone())
        .with_field("labels", task.labels.clone())
        .with_field("assignees", task.assignees.clone());
    for (key, value) in &task.extra {
        record = record.with_field(key.clone(), value.clone());
    }
    record
}

#[async_trait]
impl TaskRemote for InMemoryTaskRemote {
    async fn update_title(&self, id: TaskId, title: &str) -> RemoteResult<Task> {
        self.receive(RemoteRequest::UpdateTitle(id)).await?;
        let mut state = write_state(&self.state);
        let normalized = normalized_title(title)?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or_else(|| RemoteRequestFailure::new(format!("task {id} not found")))?;
        task.set_title(normalized);
        Ok(task.clone())
    }

    async fn create_task(&self, task: &NewTask) -> RemoteResult<Task> {
        self.receive(RemoteRequest::CreateTask(task.title.clone()))
            .await?;
        let mut state = write_state(&self.state);
        let normalized = normalized_title(&task.title)?;
        let column_known = state
            .boards
            .values()
            .any(|columns| columns.contains(&task.column));
        if !column_known {
            return Err(RemoteRequestFailure::new(format!(
                "column {} not found",
                task.column
            )));
        }

        state.next_id += 1;
        let id = TaskId::new(state.next_id);
        let record = new_record(id, task, normalized);
        let rank = state.ranks.values().max().map_or(0, |rank| rank + 1);
        state.ranks.insert(id, rank);
        state.tasks.insert(id, record.clone());
        Ok(record)
    }

    async fn delete_task(&self, id: TaskId) -> RemoteResult<()> {
        self.receive(RemoteRequest::DeleteTask(id)).await?;
        let mut state = write_state(&self.state);
        if state.tasks.remove(&id).is_none() {
            return Err(RemoteRequestFailure::new(format!("task {id} not found")));
        }
        state.ranks.remove(&id);
        Ok(())
    }

    async fn sort_tasks(&self, request: &SortTasksRequest) -> RemoteResult<()> {
        self.receive(RemoteRequest::SortTasks(request.clone()))
            .await?;
        let mut state = write_state(&self.state);
        let board = request
            .board
            .ok_or_else(|| RemoteRequestFailure::new("board: this field is required"))?;
        if !state.boards.contains_key(&board) {
            return Err(RemoteRequestFailure::new(format!("board {board} not found")));
        }
        if let Some(unknown) = request.order.iter().find(|id| !state.tasks.contains_key(*id)) {
            return Err(RemoteRequestFailure::new(format!("task {unknown} not found")));
        }

        for (column, ids) in request.tasks.iter() {
            for id in ids {
                if let Some(task) = state.tasks.get_mut(id) {
                    task.set_column(column);
                }
            }
        }
        for (rank, id) in request.order.iter().enumerate() {
            state.ranks.insert(*id, rank);
        }
        Ok(())
    }
}

#[async_trait]
impl BoardSource for InMemoryTaskRemote {
    async fn fetch_board(&self, id: BoardId) -> RemoteResult<BoardPayload> {
        self.receive(RemoteRequest::FetchBoard(id)).await?;
        let state = read_state(&self.state);
        let columns = state
            .boards
            .get(&id)
            .ok_or_else(|| RemoteRequestFailure::new(format!("board {id} not found")))?;

        let payload_columns = columns
            .iter()
            .map(|column| {
                let mut tasks: Vec<&Task> = state
                    .tasks
                    .values()
                    .filter(|task| task.column() == *column)
                    .collect();
                tasks.sort_by_key(|task| state.ranks.get(&task.id()).copied());
                ColumnPayload::new(*column, tasks.into_iter().cloned().collect())
            })
            .collect();
        Ok(BoardPayload::new(id, payload_columns))
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryTaskRemote, RemoteRequest};
    use crate::task::{
        domain::{
            BoardId, BoardPayload, ColumnId, ColumnOrder, ColumnPayload, NewTask, Task, TaskId,
        },
        ports::{BoardSource, SortTasksRequest, TaskRemote},
    };
    use rstest::{fixture, rstest};

    #[fixture]
    fn remote() -> InMemoryTaskRemote {
        let todo = ColumnId::new(1);
        let done = ColumnId::new(2);
        InMemoryTaskRemote::with_board(BoardPayload::new(
            BoardId::new(7),
            vec![
                ColumnPayload::new(
                    todo,
                    vec![
                        Task::new(TaskId::new(1), "Write docs", todo),
                        Task::new(TaskId::new(2), "Fix login", todo),
                    ],
                ),
                ColumnPayload::new(done, vec![Task::new(TaskId::new(3), "Ship it", done)]),
            ],
        ))
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_the_next_id(remote: InMemoryTaskRemote) {
        let created = remote
            .create_task(&NewTask::new("Review", ColumnId::new(2)))
            .await
            .expect("create should succeed");

        assert_eq!(created.id(), TaskId::new(4));
        assert_eq!(created.column(), ColumnId::new(2));
        assert_eq!(remote.rank(created.id()), Some(3));
    }

    #[rstest]
    #[tokio::test]
    async fn update_title_returns_the_normalized_record(remote: InMemoryTaskRemote) {
        let updated = remote
            .update_title(TaskId::new(1), "  Write more docs  ")
            .await
            .expect("update should succeed");

        assert_eq!(updated.title(), "Write more docs");
    }

    #[rstest]
    #[tokio::test]
    async fn sort_moves_tasks_and_reranks(remote: InMemoryTaskRemote) {
        let order: ColumnOrder = [
            (ColumnId::new(1), vec![TaskId::new(2)]),
            (ColumnId::new(2), vec![TaskId::new(3), TaskId::new(1)]),
        ]
        .into_iter()
        .collect();
        remote
            .sort_tasks(&SortTasksRequest::new(Some(BoardId::new(7)), order))
            .await
            .expect("sort should succeed");

        let board = remote
            .fetch_board(BoardId::new(7))
            .await
            .expect("fetch should succeed");
        let done: Vec<TaskId> = board
            .columns
            .get(1)
            .expect("board should have a second column")
            .tasks
            .iter()
            .map(Task::id)
            .collect();
        assert_eq!(done, vec![TaskId::new(3), TaskId::new(1)]);
        assert_eq!(remote.rank(TaskId::new(1)), Some(2));
    }

    #[rstest]
    #[tokio::test]
    async fn sort_without_board_is_rejected(remote: InMemoryTaskRemote) {
        let result = remote
            .sort_tasks(&SortTasksRequest::new(None, ColumnOrder::new()))
            .await;

        assert!(result.is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn forced_failure_applies_once(remote: InMemoryTaskRemote) {
        remote.fail_next("server unavailable");

        let first = remote.delete_task(TaskId::new(1)).await;
        let second = remote.delete_task(TaskId::new(1)).await;

        assert_eq!(
            first.map_err(|err| err.to_string()),
            Err("server unavailable".to_owned())
        );
        assert!(second.is_ok());
        assert_eq!(
            remote.requests(),
            vec![
                RemoteRequest::DeleteTask(TaskId::new(1)),
                RemoteRequest::DeleteTask(TaskId::new(1)),
            ]
        );
    }
}
