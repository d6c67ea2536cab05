//! Port contracts for board persistence and identifier generation.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod id_generator;
pub mod persistence;

pub use id_generator::IdGenerator;
pub use persistence::{BoardPersistence, BoardPersistenceError, BoardPersistenceResult};
