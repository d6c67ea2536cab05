//! Drop results produced by drag-and-drop gestures.
//!
//! A gesture either moves a column within the board's column order or moves a
//! task within or between columns. Positions are interpreted with
//! "move within list" semantics: the dragged item is removed first, and the
//! destination index addresses the shortened sequence when source and
//! destination share a list.

use super::{BoardDomainError, ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Position of a task slot inside a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskPosition {
    /// Column containing the slot.
    pub column_id: ColumnId,
    /// Zero-based index in the column's task order.
    pub index: usize,
}

impl TaskPosition {
    /// Creates a task position.
    #[must_use]
    pub const fn new(column_id: ColumnId, index: usize) -> Self {
        Self { column_id, index }
    }
}

/// Outcome of a drag gesture as reported by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropResult {
    /// A column was dragged along the board's single column container.
    Column {
        /// Column being dragged.
        dragged: ColumnId,
        /// Index the column was picked up from.
        source_index: usize,
        /// Index it was dropped at; `None` when the gesture was cancelled.
        destination_index: Option<usize>,
    },
    /// A task was dragged within or across columns.
    Task {
        /// Task being dragged.
        dragged: TaskId,
        /// Slot the task was picked up from.
        source: TaskPosition,
        /// Slot it was dropped at; `None` when the gesture was cancelled.
        destination: Option<TaskPosition>,
    },
}

impl DropResult {
    /// Creates a column drop.
    #[must_use]
    pub const fn column(dragged: ColumnId, source_index: usize, destination_index: usize) -> Self {
        Self::Column {
            dragged,
            source_index,
            destination_index: Some(destination_index),
        }
    }

    /// Creates a task drop.
    #[must_use]
    pub const fn task(dragged: TaskId, source: TaskPosition, destination: TaskPosition) -> Self {
        Self::Task {
            dragged,
            source,
            destination: Some(destination),
        }
    }

    /// Returns a copy of this drop with the destination removed.
    #[must_use]
    pub fn cancelled(self) -> Self {
        match self {
            Self::Column {
                dragged,
                source_index,
                ..
            } => Self::Column {
                dragged,
                source_index,
                destination_index: None,
            },
            Self::Task {
                dragged, source, ..
            } => Self::Task {
                dragged,
                source,
                destination: None,
            },
        }
    }
}

/// What applying a drop did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropOutcome {
    /// The gesture had no destination.
    Cancelled,
    /// The item was dropped where it was picked up.
    Unmoved,
    /// The item was moved.
    Moved,
}

impl DropOutcome {
    /// Returns `true` when the board changed.
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Checks that `expected` sits at `index` of `sequence`.
pub(super) fn ensure_source<T>(
    sequence: &[T],
    index: usize,
    expected: &T,
) -> Result<(), BoardDomainError>
where
    T: PartialEq + Display,
{
    match sequence.get(index) {
        Some(found) if found == expected => Ok(()),
        _ => Err(BoardDomainError::DragMismatch {
            dragged: expected.to_string(),
            index,
        }),
    }
}

/// Checks that `index` is a valid insertion point for a sequence of `len`.
pub(super) const fn ensure_insertable(len: usize, index: usize) -> Result<(), BoardDomainError> {
    if index > len {
        return Err(BoardDomainError::DropIndexOutOfRange { index, len });
    }
    Ok(())
}

/// Moves the element at `from` so that it ends up at `to`.
///
/// Both indices must have been validated against `sequence`.
pub(super) fn move_within<T>(sequence: &mut Vec<T>, from: usize, to: usize) {
    let item = sequence.remove(from);
    sequence.insert(to, item);
}
