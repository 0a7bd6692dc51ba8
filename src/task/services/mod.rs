//! Application services driving the task board.
//!
//! Each operation is a self-contained future: synchronous store updates on
//! either side of exactly one remote call.

mod board;
mod board_sync;
mod config;
mod error;
mod mutation;
mod reorder;

pub use board::TaskBoard;
pub use board_sync::BoardSync;
pub use config::TaskBoardConfig;
pub use error::{CreateTaskRejected, TaskServiceError, TaskServiceResult};
pub use mutation::TaskMutationService;
pub use reorder::{ReorderCoordinator, ReorderOutcome};
