//! Task state management for a single board session.
//!
//! The module holds the authoritative in-memory copy of a board's tasks
//! and keeps it consistent with the remote service: creation, title
//! updates, and deletion are applied once confirmed, while reordering is
//! applied immediately and reverted if the server rejects it. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
