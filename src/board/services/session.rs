//! Interactive board session: the operation surface a UI layer drives.

use std::sync::Arc;

use thiserror::Error;

use crate::board::{
    domain::{
        Board, BoardDomainError, BoardId, BoardStore, ColumnId, DropOutcome, DropResult, NewTask,
        TagCatalog, TagId, TaskId, TaskUpdate,
    },
    ports::{BoardPersistence, BoardPersistenceError, IdGenerator},
};

/// Service-level errors for board session operations.
#[derive(Debug, Clone, Error)]
pub enum BoardSessionError {
    /// The mutation was rejected; the session state is unchanged.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// The mutation was applied in memory but could not be saved.
    #[error(transparent)]
    Persistence(#[from] BoardPersistenceError),
}

impl BoardSessionError {
    /// Returns `true` when the error reports a missing board, column or task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Domain(
                BoardDomainError::BoardNotFound(_)
                    | BoardDomainError::ColumnNotFound { .. }
                    | BoardDomainError::TaskNotFound { .. }
            )
        )
    }
}

/// Result type for board session operations.
pub type BoardSessionResult<T> = Result<T, BoardSessionError>;

/// Board session owning the in-memory collection, the active-board
/// selection and the tag catalog.
///
/// Every successful mutation is followed by a full snapshot save. A rejected
/// mutation changes nothing and saves nothing. When a save fails the
/// in-memory state keeps the mutation and remains authoritative for the rest
/// of the session; the next successful save catches storage up.
pub struct BoardSession<P, G>
where
    P: BoardPersistence,
    G: IdGenerator,
{
    persistence: Arc<P>,
    ids: Arc<G>,
    catalog: TagCatalog,
    store: BoardStore,
    active_board: Option<BoardId>,
}

impl<P, G> BoardSession<P, G>
where
    P: BoardPersistence,
    G: IdGenerator,
{
    /// Creates a session with no boards.
    #[must_use]
    pub fn new(persistence: Arc<P>, ids: Arc<G>, catalog: TagCatalog) -> Self {
        Self {
            persistence,
            ids,
            catalog,
            store: BoardStore::new(),
            active_board: None,
        }
    }

    /// Creates a session from the stored snapshot, or an empty one when
    /// nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Persistence`] when the snapshot cannot be
    /// read or decoded, or [`BoardSessionError::Domain`] when it describes an
    /// inconsistent collection.
    pub async fn open(
        persistence: Arc<P>,
        ids: Arc<G>,
        catalog: TagCatalog,
    ) -> BoardSessionResult<Self> {
        let loaded = persistence.load().await.inspect_err(|err| {
            tracing::warn!(error = %err, "failed to load board snapshot");
        })?;
        let store = match loaded {
            Some(boards) => BoardStore::from_boards(boards)?,
            None => BoardStore::new(),
        };
        tracing::debug!(boards = store.len(), "opened board session");
        Ok(Self {
            persistence,
            ids,
            catalog,
            store,
            active_board: None,
        })
    }

    /// Returns all boards in creation order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        self.store.boards()
    }

    /// Looks up a board.
    #[must_use]
    pub fn board(&self, board_id: BoardId) -> Option<&Board> {
        self.store.board(board_id)
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &BoardStore {
        &self.store
    }

    /// Returns the catalog offered when editing task tags.
    #[must_use]
    pub const fn tag_catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    /// Returns the selected board identifier.
    #[must_use]
    pub const fn active_board_id(&self) -> Option<BoardId> {
        self.active_board
    }

    /// Returns the selected board.
    #[must_use]
    pub fn active_board(&self) -> Option<&Board> {
        self.active_board
            .and_then(|board_id| self.store.board(board_id))
    }

    /// Selects a board for display.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::BoardNotFound`] when the board is missing;
    /// the previous selection is kept.
    pub fn select_board(&mut self, board_id: BoardId) -> BoardSessionResult<&Board> {
        let board = self
            .store
            .board(board_id)
            .ok_or(BoardDomainError::BoardNotFound(board_id))?;
        self.active_board = Some(board_id);
        Ok(board)
    }

    /// Clears the board selection.
    pub const fn clear_selection(&mut self) {
        self.active_board = None;
    }

    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Persistence`] when the snapshot cannot be
    /// saved. The board has still been created and is the last entry of
    /// [`Self::boards`].
    pub async fn create_board(&mut self, name: impl Into<String>) -> BoardSessionResult<BoardId> {
        let board_id = self.store.create_board(name, &*self.ids);
        tracing::debug!(%board_id, "created board");
        self.persist().await?;
        Ok(board_id)
    }

    /// Renames a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the board is missing or
    /// [`BoardSessionError::Persistence`] when the snapshot cannot be saved.
    pub async fn rename_board(
        &mut self,
        board_id: BoardId,
        name: impl Into<String>,
    ) -> BoardSessionResult<()> {
        self.store
            .rename_board(board_id, name)
            .inspect_err(log_rejected)?;
        tracing::debug!(%board_id, "renamed board");
        self.persist().await
    }

    /// Deletes a board, clearing the selection when it was selected.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the board is missing or
    /// [`BoardSessionError::Persistence`] when the snapshot cannot be saved.
    pub async fn delete_board(&mut self, board_id: BoardId) -> BoardSessionResult<Board> {
        let removed = self
            .store
            .delete_board(board_id)
            .inspect_err(log_rejected)?;
        if self.active_board == Some(board_id) {
            self.active_board = None;
        }
        tracing::debug!(%board_id, "deleted board");
        self.persist().await?;
        Ok(removed)
    }

    /// Appends a column to a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the board is missing or
    /// [`BoardSessionError::Persistence`] when the snapshot cannot be saved.
    /// In that case the column has still been added and is the last entry of
    /// the board's column order.
    pub async fn add_column(
        &mut self,
        board_id: BoardId,
        title: impl Into<String>,
    ) -> BoardSessionResult<ColumnId> {
        let column_id = self
            .store
            .add_column(board_id, title, &*self.ids)
            .inspect_err(log_rejected)?;
        tracing::debug!(%board_id, %column_id, "added column");
        self.persist().await?;
        Ok(column_id)
    }

    /// Renames a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the board or column is
    /// missing or [`BoardSessionError::Persistence`] when the snapshot cannot
    /// be saved.
    pub async fn rename_column(
        &mut self,
        board_id: BoardId,
        column_id: ColumnId,
        title: impl Into<String>,
    ) -> BoardSessionResult<()> {
        self.store
            .rename_column(board_id, column_id, title)
            .inspect_err(log_rejected)?;
        tracing::debug!(%board_id, %column_id, "renamed column");
        self.persist().await
    }

    /// Deletes a column together with the tasks it lists.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the board or column is
    /// missing or [`BoardSessionError::Persistence`] when the snapshot cannot
    /// be saved.
    pub async fn delete_column(
        &mut self,
        board_id: BoardId,
        column_id: ColumnId,
    ) -> BoardSessionResult<()> {
        let removed = self
            .store
            .delete_column(board_id, column_id)
            .inspect_err(log_rejected)?;
        tracing::debug!(
            %board_id,
            %column_id,
            cascaded_tasks = removed.task_ids().len(),
            "deleted column"
        );
        self.persist().await
    }

    /// Adds a task at the end of a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the board or column is
    /// missing or [`BoardSessionError::Persistence`] when the snapshot cannot
    /// be saved. In that case the task has still been added and is the last
    /// entry of the column's task order.
    pub async fn add_task(
        &mut self,
        board_id: BoardId,
        column_id: ColumnId,
        draft: NewTask,
    ) -> BoardSessionResult<TaskId> {
        let task_id = self
            .store
            .add_task(board_id, column_id, draft, &*self.ids)
            .inspect_err(log_rejected)?;
        tracing::debug!(%board_id, %column_id, %task_id, "added task");
        self.persist().await?;
        Ok(task_id)
    }

    /// Merges a partial update into a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the board or task is
    /// missing or [`BoardSessionError::Persistence`] when the snapshot cannot
    /// be saved.
    pub async fn edit_task(
        &mut self,
        board_id: BoardId,
        task_id: TaskId,
        update: TaskUpdate,
    ) -> BoardSessionResult<()> {
        self.store
            .edit_task(board_id, task_id, update)
            .inspect_err(log_rejected)?;
        tracing::debug!(%board_id, %task_id, "edited task");
        self.persist().await
    }

    /// Flips a task's completion flag, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the board or task is
    /// missing or [`BoardSessionError::Persistence`] when the snapshot cannot
    /// be saved.
    pub async fn toggle_task_completed(
        &mut self,
        board_id: BoardId,
        task_id: TaskId,
    ) -> BoardSessionResult<bool> {
        let board = self
            .store
            .board(board_id)
            .ok_or(BoardDomainError::BoardNotFound(board_id))?;
        let completed = !board
            .task(task_id)
            .ok_or(BoardDomainError::TaskNotFound { board_id, task_id })?
            .is_completed();
        self.edit_task(
            board_id,
            task_id,
            TaskUpdate::new().with_completed(completed),
        )
        .await?;
        Ok(completed)
    }

    /// Replaces a task's tags with the catalog tags named by `tag_ids`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when a tag is not in the catalog
    /// or the board or task is missing, or
    /// [`BoardSessionError::Persistence`] when the snapshot cannot be saved.
    pub async fn set_task_tags(
        &mut self,
        board_id: BoardId,
        task_id: TaskId,
        tag_ids: &[TagId],
    ) -> BoardSessionResult<()> {
        let tags = self.catalog.resolve(tag_ids).inspect_err(log_rejected)?;
        self.edit_task(board_id, task_id, TaskUpdate::new().with_tags(tags))
            .await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the board or task is
    /// missing or [`BoardSessionError::Persistence`] when the snapshot cannot
    /// be saved.
    pub async fn delete_task(
        &mut self,
        board_id: BoardId,
        task_id: TaskId,
    ) -> BoardSessionResult<()> {
        self.store
            .delete_task(board_id, task_id)
            .inspect_err(log_rejected)?;
        tracing::debug!(%board_id, %task_id, "deleted task");
        self.persist().await
    }

    /// Applies the result of a drag-and-drop gesture.
    ///
    /// Cancelled and unmoved drops change nothing and are not saved.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the drop references missing
    /// items or inconsistent positions, or
    /// [`BoardSessionError::Persistence`] when the snapshot cannot be saved.
    pub async fn handle_drop(
        &mut self,
        board_id: BoardId,
        drop: DropResult,
    ) -> BoardSessionResult<DropOutcome> {
        let outcome = self
            .store
            .apply_drop(board_id, drop)
            .inspect_err(log_rejected)?;
        if !outcome.is_moved() {
            tracing::debug!(%board_id, ?outcome, "drop left board unchanged");
            return Ok(outcome);
        }
        tracing::debug!(%board_id, "applied drop");
        self.persist().await?;
        Ok(outcome)
    }

    async fn persist(&self) -> BoardSessionResult<()> {
        self.persistence
            .save(self.store.boards())
            .await
            .inspect_err(|err| {
                tracing::warn!(error = %err, "failed to save board snapshot");
            })?;
        Ok(())
    }
}

fn log_rejected(err: &BoardDomainError) {
    tracing::debug!(error = %err, "board mutation rejected");
}
