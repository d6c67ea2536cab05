//! Persistence port for the board collection snapshot.

use crate::board::{domain::Board, snapshot::SnapshotError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board persistence operations.
pub type BoardPersistenceResult<T> = Result<T, BoardPersistenceError>;

/// Snapshot persistence contract.
///
/// The whole board collection is loaded once at session start and written
/// back in full after every state transition, so `save` must be idempotent.
#[async_trait]
pub trait BoardPersistence: Send + Sync {
    /// Loads the stored collection.
    ///
    /// Returns `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`BoardPersistenceError::Snapshot`] when the stored blob
    /// cannot be decoded or [`BoardPersistenceError::Io`] when storage is
    /// unavailable.
    async fn load(&self) -> BoardPersistenceResult<Option<Vec<Board>>>;

    /// Replaces the stored collection with `boards`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardPersistenceError::Snapshot`] when encoding fails or
    /// [`BoardPersistenceError::Io`] when storage is unavailable.
    async fn save(&self, boards: &[Board]) -> BoardPersistenceResult<()>;
}

/// Errors returned by persistence implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardPersistenceError {
    /// The snapshot blob could not be encoded or decoded.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardPersistenceError {
    /// Wraps a storage error.
    #[must_use]
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }
}
