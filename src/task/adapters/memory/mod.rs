//! In-memory adapters for tests and local demos.

mod notifier;
mod remote;

pub use notifier::{Notification, RecordingNotifier};
pub use remote::{InMemoryTaskRemote, RemoteRequest};
