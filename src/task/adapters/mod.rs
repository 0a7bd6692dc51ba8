//! Adapter implementations for the task board ports.

pub mod memory;

mod tracing_notifier;

pub use tracing_notifier::TracingNotifier;
