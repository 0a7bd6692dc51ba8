//! Domain model for the client-side task board.
//!
//! The store and its transition table live here, free of any network or
//! notification concerns.

mod action;
mod board;
mod error;
mod ids;
mod lifecycle;
mod store;
mod task;

pub use action::TaskAction;
pub use board::{BoardPayload, ColumnOrder, ColumnPayload};
pub use error::InvariantViolation;
pub use ids::{BoardId, ColumnId, TaskId};
pub use lifecycle::{CreateLifecycle, CreatePhase};
pub use store::{CreateDialog, TaskStore};
pub use task::{NewTask, Task};
