//! Error types for board mutations and invariant checks.

use super::{BoardId, ColumnId, TagId, TaskId};
use thiserror::Error;

/// Errors returned by board mutations.
///
/// Every variant describes an operation that was rejected before any state
/// changed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The board does not exist.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// The column does not exist on the board.
    #[error("column {column_id} not found on board {board_id}")]
    ColumnNotFound {
        /// Board that was searched.
        board_id: BoardId,
        /// Missing column.
        column_id: ColumnId,
    },

    /// The task does not exist on the board.
    #[error("task {task_id} not found on board {board_id}")]
    TaskNotFound {
        /// Board that was searched.
        board_id: BoardId,
        /// Missing task.
        task_id: TaskId,
    },

    /// The dragged item is not the one found at the drop source index.
    #[error("dragged item {dragged} does not match the item at source index {index}")]
    DragMismatch {
        /// Identifier carried by the drop event.
        dragged: String,
        /// Source index carried by the drop event.
        index: usize,
    },

    /// A drop index lies outside the target sequence.
    #[error("drop index {index} is out of range for a sequence of length {len}")]
    DropIndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Length of the sequence the index was applied to.
        len: usize,
    },

    /// The tag is not part of the catalog.
    #[error("unknown tag: {0}")]
    UnknownTag(TagId),

    /// A board with the same identifier is already present.
    #[error("duplicate board identifier: {0}")]
    DuplicateBoard(BoardId),

    /// A board failed its structural invariants.
    #[error("board {board_id} is inconsistent: {violation}")]
    Invariant {
        /// Offending board.
        board_id: BoardId,
        /// First violation found.
        violation: InvariantViolation,
    },
}

/// A broken structural invariant of a board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// `columnOrder` lists a column missing from `columns`.
    #[error("column order references unknown column {0}")]
    DanglingColumn(ColumnId),

    /// `columns` holds a column missing from `columnOrder`.
    #[error("column {0} is not listed in the column order")]
    UnorderedColumn(ColumnId),

    /// `columnOrder` lists the same column twice.
    #[error("column {0} appears more than once in the column order")]
    RepeatedColumn(ColumnId),

    /// A column lists a task missing from `tasks`.
    #[error("column {column_id} references unknown task {task_id}")]
    DanglingTask {
        /// Column holding the reference.
        column_id: ColumnId,
        /// Missing task.
        task_id: TaskId,
    },

    /// A task is listed more than once across the board's columns.
    #[error("task {0} is listed more than once")]
    SharedTask(TaskId),

    /// A task is not listed by any column.
    #[error("task {0} is not listed by any column")]
    OrphanTask(TaskId),

    /// A column's own identifier differs from its map key.
    #[error("column stored under {key} carries identifier {actual}")]
    ColumnKeyMismatch {
        /// Map key.
        key: ColumnId,
        /// Identifier inside the column.
        actual: ColumnId,
    },

    /// A task's own identifier differs from its map key.
    #[error("task stored under {key} carries identifier {actual}")]
    TaskKeyMismatch {
        /// Map key.
        key: TaskId,
        /// Identifier inside the task.
        actual: TaskId,
    },
}
