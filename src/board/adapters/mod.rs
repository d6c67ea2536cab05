//! Adapter implementations of the board ports.
//!
//! - [`memory::InMemoryBoardPersistence`]: keeps the encoded snapshot in
//!   memory, for tests and throwaway sessions
//! - [`fs::FsBoardPersistence`]: stores the snapshot as one JSON file inside a
//!   capability-scoped directory
//! - [`ids`]: random and sequential identifier generators

pub mod fs;
pub mod ids;
pub mod memory;
