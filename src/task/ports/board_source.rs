//! Board fetch port.

use super::RemoteResult;
use crate::task::domain::{BoardId, BoardPayload};
use async_trait::async_trait;

/// Supplies the columns and tasks of a board on load.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardSource: Send + Sync {
    /// Fetches a board with its columns and their tasks in display order.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteRequestFailure`](super::RemoteRequestFailure) when
    /// the board cannot be fetched.
    async fn fetch_board(&self, id: BoardId) -> RemoteResult<BoardPayload>;
}
