//! Port contracts for the task board.
//!
//! Ports define the collaborators the services talk to: the remote
//! persistence service, the board fetch, and the notification sink.

pub mod board_source;
pub mod notifier;
pub mod remote;

pub use board_source::BoardSource;
pub use notifier::{NotificationKind, Notifier};
pub use remote::{RemoteRequestFailure, RemoteResult, SortTasksRequest, TaskRemote};

#[cfg(test)]
pub use board_source::MockBoardSource;
#[cfg(test)]
pub use notifier::MockNotifier;
#[cfg(test)]
pub use remote::MockTaskRemote;
