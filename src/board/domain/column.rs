//! Column entity: a titled lane holding an ordered list of task references.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Ordered lane within a board.
///
/// `task_ids` is an order index over the board's task map; the column does
/// not own the tasks it lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    id: ColumnId,
    title: String,
    task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the listed task identifiers in display order.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns `true` when the column lists `task_id`.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.task_ids.contains(&task_id)
    }

    pub(super) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(super) fn push_task(&mut self, task_id: TaskId) {
        self.task_ids.push(task_id);
    }

    pub(super) fn remove_task(&mut self, task_id: TaskId) {
        self.task_ids.retain(|id| *id != task_id);
    }

    pub(super) const fn task_ids_mut(&mut self) -> &mut Vec<TaskId> {
        &mut self.task_ids
    }
}
