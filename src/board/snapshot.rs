//! Snapshot codec for the persisted board collection.
//!
//! The collection is stored as one JSON document: an array of boards whose
//! `columns` and `tasks` are identifier-keyed objects and whose
//! `columnOrder` / `taskIds` are arrays. Decoding re-checks every board
//! invariant so a tampered or truncated blob never reaches the store.

use crate::board::domain::{Board, BoardDomainError, BoardStore};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while encoding or decoding a snapshot.
#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    /// Serialization failed.
    #[error("failed to encode board snapshot: {0}")]
    Encode(Arc<serde_json::Error>),

    /// The blob is not a valid board collection document.
    #[error("failed to decode board snapshot: {0}")]
    Decode(Arc<serde_json::Error>),

    /// The blob decoded but describes an inconsistent collection.
    #[error("board snapshot is inconsistent: {0}")]
    Invalid(#[from] BoardDomainError),
}

/// Encodes boards into a snapshot blob.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] when serialization fails.
pub fn encode_snapshot(boards: &[Board]) -> Result<String, SnapshotError> {
    serde_json::to_string(boards).map_err(|err| SnapshotError::Encode(Arc::new(err)))
}

/// Decodes a snapshot blob into boards, validating their invariants.
///
/// # Errors
///
/// Returns [`SnapshotError::Decode`] for malformed JSON and
/// [`SnapshotError::Invalid`] for duplicate boards or broken invariants.
pub fn decode_snapshot(blob: &str) -> Result<Vec<Board>, SnapshotError> {
    let boards: Vec<Board> =
        serde_json::from_str(blob).map_err(|err| SnapshotError::Decode(Arc::new(err)))?;
    Ok(BoardStore::from_boards(boards)?.into_boards())
}
