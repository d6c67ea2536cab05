//! Kanban boards: columns of ordered tasks, drag-and-drop reordering and
//! snapshot persistence.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types and the [`domain::BoardStore`] mutations in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The UI-facing [`services::BoardSession`] in [`services`]
//! - The persisted blob format in [`snapshot`]
//! - Storage and tag catalog settings in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod snapshot;

#[cfg(test)]
mod tests;
