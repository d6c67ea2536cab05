//! Filesystem adapter implementations.

mod snapshot;

pub use snapshot::FsBoardPersistence;
