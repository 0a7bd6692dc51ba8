//! Taskboard: client-side state for a kanban task board.
//!
//! This crate keeps the local copy of a board's tasks grouped by column,
//! applies user mutations, and reconciles them with a remote persistence
//! service. Reordering is applied optimistically and rolled back when the
//! server rejects it.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: the task store and its transition table, no I/O
//! - **Ports**: trait interfaces for the remote service, board fetch, and
//!   notifications
//! - **Adapters**: in-memory and `tracing`-backed implementations of ports
//! - **Services**: operations that combine the store with ports
//!
//! # Modules
//!
//! - [`task`]: task store, mutations, reordering, and board loading

pub mod task;
