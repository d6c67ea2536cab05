//! Board aggregate root.

use super::{
    BoardDomainError, BoardId, Column, ColumnId, DropOutcome, DropResult, InvariantViolation,
    NewTask, Task, TaskId, TaskPosition, TaskUpdate,
    drag::{ensure_insertable, ensure_source, move_within},
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Board aggregate: columns and tasks stored by identifier, plus the column
/// order index.
///
/// Mutations validate every precondition before touching state, so a
/// rejected mutation leaves the board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    id: BoardId,
    name: String,
    columns: HashMap<ColumnId, Column>,
    tasks: HashMap<TaskId, Task>,
    column_order: Vec<ColumnId>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new(id: BoardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            columns: HashMap::new(),
            tasks: HashMap::new(),
            column_order: Vec::new(),
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the board name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column map.
    #[must_use]
    pub const fn columns(&self) -> &HashMap<ColumnId, Column> {
        &self.columns
    }

    /// Returns the task map.
    #[must_use]
    pub const fn tasks(&self) -> &HashMap<TaskId, Task> {
        &self.tasks
    }

    /// Returns the column identifiers in display order.
    #[must_use]
    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    /// Looks up a column.
    #[must_use]
    pub fn column(&self, column_id: ColumnId) -> Option<&Column> {
        self.columns.get(&column_id)
    }

    /// Looks up a task.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.get(&task_id)
    }

    /// Iterates columns in display order.
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order
            .iter()
            .filter_map(|column_id| self.columns.get(column_id))
    }

    /// Iterates the tasks of a column in display order.
    ///
    /// Yields nothing when the column does not exist.
    pub fn column_tasks(&self, column_id: ColumnId) -> impl Iterator<Item = &Task> {
        self.columns
            .get(&column_id)
            .map(Column::task_ids)
            .unwrap_or_default()
            .iter()
            .filter_map(|task_id| self.tasks.get(task_id))
    }

    /// Returns the column currently listing `task_id`.
    #[must_use]
    pub fn column_of(&self, task_id: TaskId) -> Option<&Column> {
        self.columns.values().find(|column| column.contains(task_id))
    }

    /// Checks the structural invariants of the board.
    ///
    /// Besides the map/order agreement and single ownership of every listed
    /// task, every task must be listed by some column. A stored board holding
    /// an unlisted task is therefore rejected with
    /// [`InvariantViolation::OrphanTask`], even though such a board renders
    /// and mutates without harm; no operation in this crate can produce one.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let mut ordered = HashSet::with_capacity(self.column_order.len());
        for column_id in &self.column_order {
            if !self.columns.contains_key(column_id) {
                return Err(InvariantViolation::DanglingColumn(*column_id));
            }
            if !ordered.insert(*column_id) {
                return Err(InvariantViolation::RepeatedColumn(*column_id));
            }
        }

        let mut listed = HashSet::with_capacity(self.tasks.len());
        for (key, column) in &self.columns {
            if column.id() != *key {
                return Err(InvariantViolation::ColumnKeyMismatch {
                    key: *key,
                    actual: column.id(),
                });
            }
            if !ordered.contains(key) {
                return Err(InvariantViolation::UnorderedColumn(*key));
            }
            for task_id in column.task_ids() {
                if !self.tasks.contains_key(task_id) {
                    return Err(InvariantViolation::DanglingTask {
                        column_id: *key,
                        task_id: *task_id,
                    });
                }
                if !listed.insert(*task_id) {
                    return Err(InvariantViolation::SharedTask(*task_id));
                }
            }
        }

        for (key, task) in &self.tasks {
            if task.id() != *key {
                return Err(InvariantViolation::TaskKeyMismatch {
                    key: *key,
                    actual: task.id(),
                });
            }
            if !listed.contains(key) {
                return Err(InvariantViolation::OrphanTask(*key));
            }
        }

        Ok(())
    }

    pub(super) fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub(super) fn add_column(&mut self, column_id: ColumnId, title: String) {
        self.columns.insert(column_id, Column::new(column_id, title));
        self.column_order.push(column_id);
    }

    pub(super) fn rename_column(
        &mut self,
        column_id: ColumnId,
        title: String,
    ) -> Result<(), BoardDomainError> {
        self.column_mut(column_id)?.set_title(title);
        Ok(())
    }

    /// Removes a column and every task it lists.
    pub(super) fn delete_column(&mut self, column_id: ColumnId) -> Result<Column, BoardDomainError> {
        let column = self
            .columns
            .remove(&column_id)
            .ok_or_else(|| self.column_not_found(column_id))?;
        self.column_order.retain(|id| *id != column_id);
        for task_id in column.task_ids() {
            self.tasks.remove(task_id);
        }
        Ok(column)
    }

    pub(super) fn add_task(
        &mut self,
        column_id: ColumnId,
        task_id: TaskId,
        draft: NewTask,
    ) -> Result<(), BoardDomainError> {
        self.column_mut(column_id)?.push_task(task_id);
        self.tasks.insert(task_id, Task::new(task_id, draft));
        Ok(())
    }

    pub(super) fn edit_task(
        &mut self,
        task_id: TaskId,
        update: TaskUpdate,
    ) -> Result<(), BoardDomainError> {
        let board_id = self.id;
        let task = self
            .tasks
            .get_mut(&task_id)
            .ok_or(BoardDomainError::TaskNotFound { board_id, task_id })?;
        task.apply(update);
        Ok(())
    }

    /// Removes a task and every reference to it.
    pub(super) fn delete_task(&mut self, task_id: TaskId) -> Result<Task, BoardDomainError> {
        let task = self
            .tasks
            .remove(&task_id)
            .ok_or(BoardDomainError::TaskNotFound {
                board_id: self.id,
                task_id,
            })?;
        for column in self.columns.values_mut() {
            column.remove_task(task_id);
        }
        Ok(task)
    }

    pub(super) fn apply_drop(&mut self, drop: DropResult) -> Result<DropOutcome, BoardDomainError> {
        match drop {
            DropResult::Column {
                dragged,
                source_index,
                destination_index,
            } => {
                let Some(target_index) = destination_index else {
                    return Ok(DropOutcome::Cancelled);
                };
                self.move_column(dragged, source_index, target_index)
            }
            DropResult::Task {
                dragged,
                source,
                destination,
            } => {
                let Some(target) = destination else {
                    return Ok(DropOutcome::Cancelled);
                };
                if source.column_id == target.column_id {
                    self.move_task_within(dragged, source, target.index)
                } else {
                    self.move_task_across(dragged, source, target)
                }
            }
        }
    }

    fn move_column(
        &mut self,
        dragged: ColumnId,
        source_index: usize,
        destination_index: usize,
    ) -> Result<DropOutcome, BoardDomainError> {
        if source_index == destination_index {
            return Ok(DropOutcome::Unmoved);
        }
        ensure_source(&self.column_order, source_index, &dragged)?;
        ensure_insertable(self.column_order.len().saturating_sub(1), destination_index)?;
        move_within(&mut self.column_order, source_index, destination_index);
        Ok(DropOutcome::Moved)
    }

    fn move_task_within(
        &mut self,
        dragged: TaskId,
        source: TaskPosition,
        destination_index: usize,
    ) -> Result<DropOutcome, BoardDomainError> {
        if source.index == destination_index {
            return Ok(DropOutcome::Unmoved);
        }
        let column = self.column_mut(source.column_id)?;
        ensure_source(column.task_ids(), source.index, &dragged)?;
        ensure_insertable(column.task_ids().len().saturating_sub(1), destination_index)?;
        move_within(column.task_ids_mut(), source.index, destination_index);
        Ok(DropOutcome::Moved)
    }

    fn move_task_across(
        &mut self,
        dragged: TaskId,
        source: TaskPosition,
        destination: TaskPosition,
    ) -> Result<DropOutcome, BoardDomainError> {
        let source_column = self.existing_column(source.column_id)?;
        ensure_source(source_column.task_ids(), source.index, &dragged)?;
        let destination_column = self.existing_column(destination.column_id)?;
        ensure_insertable(destination_column.task_ids().len(), destination.index)?;

        self.column_mut(source.column_id)?
            .task_ids_mut()
            .remove(source.index);
        self.column_mut(destination.column_id)?
            .task_ids_mut()
            .insert(destination.index, dragged);
        Ok(DropOutcome::Moved)
    }

    fn existing_column(&self, column_id: ColumnId) -> Result<&Column, BoardDomainError> {
        self.columns
            .get(&column_id)
            .ok_or_else(|| self.column_not_found(column_id))
    }

    fn column_mut(&mut self, column_id: ColumnId) -> Result<&mut Column, BoardDomainError> {
        let board_id = self.id;
        self.columns
            .get_mut(&column_id)
            .ok_or(BoardDomainError::ColumnNotFound {
                board_id,
                column_id,
            })
    }

    const fn column_not_found(&self, column_id: ColumnId) -> BoardDomainError {
        BoardDomainError::ColumnNotFound {
            board_id: self.id,
            column_id,
        }
    }
}
