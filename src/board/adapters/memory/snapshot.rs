//! In-memory snapshot persistence.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::Board,
    ports::{BoardPersistence, BoardPersistenceError, BoardPersistenceResult},
    snapshot::{decode_snapshot, encode_snapshot},
};

/// Thread-safe persistence that keeps the encoded snapshot blob in memory.
///
/// The blob goes through the same codec as durable adapters, so round-trip
/// behaviour is exercised even without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardPersistence {
    state: Arc<RwLock<InMemorySnapshotState>>,
}

#[derive(Debug, Default)]
struct InMemorySnapshotState {
    blob: Option<String>,
    saves: usize,
}

impl InMemoryBoardPersistence {
    /// Creates an empty persistence store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a persistence store preloaded with an encoded snapshot.
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemorySnapshotState {
                blob: Some(blob.into()),
                saves: 0,
            })),
        }
    }

    /// Returns the stored blob, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BoardPersistenceError::Io`] when the lock is poisoned.
    pub fn blob(&self) -> BoardPersistenceResult<Option<String>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.blob.clone())
    }

    /// Returns how many times [`BoardPersistence::save`] succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`BoardPersistenceError::Io`] when the lock is poisoned.
    pub fn save_count(&self) -> BoardPersistenceResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.saves)
    }
}

fn poisoned(err: impl std::fmt::Display) -> BoardPersistenceError {
    BoardPersistenceError::io(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BoardPersistence for InMemoryBoardPersistence {
    async fn load(&self) -> BoardPersistenceResult<Option<Vec<Board>>> {
        let blob = self.blob()?;
        blob.as_deref()
            .map(decode_snapshot)
            .transpose()
            .map_err(BoardPersistenceError::from)
    }

    async fn save(&self, boards: &[Board]) -> BoardPersistenceResult<()> {
        let encoded = encode_snapshot(boards)?;
        let mut state = self.state.write().map_err(poisoned)?;
        state.blob = Some(encoded);
        state.saves = state.saves.saturating_add(1);
        Ok(())
    }
}
