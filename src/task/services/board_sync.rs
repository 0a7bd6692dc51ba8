//! Seeding the board from fetched payloads.

use super::{TaskBoard, TaskServiceResult};
use crate::task::{
    domain::{BoardId, BoardPayload, TaskAction},
    ports::BoardSource,
};
use std::sync::Arc;

/// Loads boards into the store, replacing whatever was there.
pub struct BoardSync<S>
where
    S: BoardSource,
{
    board: TaskBoard,
    source: Arc<S>,
}

impl<S> Clone for BoardSync<S>
where
    S: BoardSource,
{
    fn clone(&self) -> Self {
        Self {
            board: self.board.clone(),
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> BoardSync<S>
where
    S: BoardSource,
{
    /// Creates a synchroniser for `board`.
    #[must_use]
    pub const fn new(board: TaskBoard, source: Arc<S>) -> Self {
        Self { board, source }
    }

    /// Seeds the store from an already-fetched payload.
    pub fn seed(&self, payload: BoardPayload) {
        tracing::debug!(
            board = %payload.id,
            columns = payload.columns.len(),
            "seeding task store"
        );
        self.board.dispatch(TaskAction::Seed(payload));
    }

    /// Fetches a board and seeds the store from it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Remote`](super::TaskServiceError::Remote)
    /// when the fetch fails. The store keeps its previous contents.
    pub async fn load(&self, id: BoardId) -> TaskServiceResult<()> {
        let payload = self.source.fetch_board(id).await.inspect_err(|err| {
            tracing::warn!(board = %id, error = %err, "board fetch failed");
        })?;
        self.seed(payload);
        Ok(())
    }
}
