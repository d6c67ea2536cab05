//! In-memory adapter implementations for testing.

mod snapshot;

pub use snapshot::InMemoryBoardPersistence;
