//! Board collection and its mutation operations.

use super::{
    Board, BoardDomainError, BoardId, Column, ColumnId, DropOutcome, DropResult, NewTask, Task,
    TaskId, TaskUpdate,
};
use crate::board::ports::IdGenerator;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered collection of boards and the single entry point for mutating them.
///
/// Each operation either applies completely or returns an error with the
/// collection untouched. Operations that reference a missing board, column
/// or task report a `*NotFound` error and change nothing.
///
/// Deserializing goes through [`BoardStore::from_boards`], so a document with
/// duplicate or inconsistent boards is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Board>", into = "Vec<Board>")]
pub struct BoardStore {
    boards: Vec<Board>,
}

impl BoardStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { boards: Vec::new() }
    }

    /// Builds a store from previously persisted boards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateBoard`] when two boards share an
    /// identifier, or [`BoardDomainError::Invariant`] when a board is
    /// structurally inconsistent.
    pub fn from_boards(boards: Vec<Board>) -> Result<Self, BoardDomainError> {
        let mut seen = HashSet::with_capacity(boards.len());
        for board in &boards {
            if !seen.insert(board.id()) {
                return Err(BoardDomainError::DuplicateBoard(board.id()));
            }
            board
                .validate()
                .map_err(|violation| BoardDomainError::Invariant {
                    board_id: board.id(),
                    violation,
                })?;
        }
        Ok(Self { boards })
    }

    /// Returns the boards in creation order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Consumes the store, returning its boards.
    #[must_use]
    pub fn into_boards(self) -> Vec<Board> {
        self.boards
    }

    /// Looks up a board.
    #[must_use]
    pub fn board(&self, board_id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id() == board_id)
    }

    /// Returns the number of boards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Returns `true` when the store holds no boards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Appends a new empty board.
    pub fn create_board(&mut self, name: impl Into<String>, ids: &impl IdGenerator) -> BoardId {
        let board_id = BoardId::generate(ids);
        self.boards.push(Board::new(board_id, name));
        board_id
    }

    /// Replaces a board's name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::BoardNotFound`] when the board is missing.
    pub fn rename_board(
        &mut self,
        board_id: BoardId,
        name: impl Into<String>,
    ) -> Result<(), BoardDomainError> {
        self.board_mut(board_id)?.rename(name.into());
        Ok(())
    }

    /// Removes a board together with all its columns and tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::BoardNotFound`] when the board is missing.
    pub fn delete_board(&mut self, board_id: BoardId) -> Result<Board, BoardDomainError> {
        let position = self
            .boards
            .iter()
            .position(|board| board.id() == board_id)
            .ok_or(BoardDomainError::BoardNotFound(board_id))?;
        Ok(self.boards.remove(position))
    }

    /// Appends a new empty column to the board's column order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::BoardNotFound`] when the board is missing.
    pub fn add_column(
        &mut self,
        board_id: BoardId,
        title: impl Into<String>,
        ids: &impl IdGenerator,
    ) -> Result<ColumnId, BoardDomainError> {
        let board = self.board_mut(board_id)?;
        let column_id = ColumnId::generate(ids);
        board.add_column(column_id, title.into());
        Ok(column_id)
    }

    /// Replaces a column's title.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the board or column is missing.
    pub fn rename_column(
        &mut self,
        board_id: BoardId,
        column_id: ColumnId,
        title: impl Into<String>,
    ) -> Result<(), BoardDomainError> {
        self.board_mut(board_id)?
            .rename_column(column_id, title.into())
    }

    /// Removes a column and every task it lists.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the board or column is missing.
    pub fn delete_column(
        &mut self,
        board_id: BoardId,
        column_id: ColumnId,
    ) -> Result<Column, BoardDomainError> {
        self.board_mut(board_id)?.delete_column(column_id)
    }

    /// Creates an open, untagged task at the end of a column.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the board or column is missing.
    pub fn add_task(
        &mut self,
        board_id: BoardId,
        column_id: ColumnId,
        draft: NewTask,
        ids: &impl IdGenerator,
    ) -> Result<TaskId, BoardDomainError> {
        let board = self.board_mut(board_id)?;
        let task_id = TaskId::generate(ids);
        board.add_task(column_id, task_id, draft)?;
        Ok(task_id)
    }

    /// Merges the fields present in `update` into a task.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the board or task is missing.
    pub fn edit_task(
        &mut self,
        board_id: BoardId,
        task_id: TaskId,
        update: TaskUpdate,
    ) -> Result<(), BoardDomainError> {
        self.board_mut(board_id)?.edit_task(task_id, update)
    }

    /// Removes a task from the board and from the column listing it.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the board or task is missing.
    pub fn delete_task(
        &mut self,
        board_id: BoardId,
        task_id: TaskId,
    ) -> Result<Task, BoardDomainError> {
        self.board_mut(board_id)?.delete_task(task_id)
    }

    /// Applies a drag-and-drop result to a board.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for a missing board or column,
    /// [`BoardDomainError::DragMismatch`] when the dragged item is not at the
    /// source index, or [`BoardDomainError::DropIndexOutOfRange`] when the
    /// destination index cannot be inserted at.
    pub fn apply_drop(
        &mut self,
        board_id: BoardId,
        drop: DropResult,
    ) -> Result<DropOutcome, BoardDomainError> {
        self.board_mut(board_id)?.apply_drop(drop)
    }

    fn board_mut(&mut self, board_id: BoardId) -> Result<&mut Board, BoardDomainError> {
        self.boards
            .iter_mut()
            .find(|board| board.id() == board_id)
            .ok_or(BoardDomainError::BoardNotFound(board_id))
    }
}

impl TryFrom<Vec<Board>> for BoardStore {
    type Error = BoardDomainError;

    fn try_from(boards: Vec<Board>) -> Result<Self, Self::Error> {
        Self::from_boards(boards)
    }
}

impl From<BoardStore> for Vec<Board> {
    fn from(store: BoardStore) -> Self {
        store.boards
    }
}
