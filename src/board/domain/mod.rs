//! Domain model for kanban boards.
//!
//! Boards own their columns and tasks through identifier-keyed maps, and keep
//! display order in separate identifier sequences: `column_order` on the
//! board and `task_ids` on each column. [`BoardStore`] is the only place that
//! mutates them.

mod board;
mod column;
mod drag;
mod error;
mod ids;
mod store;
mod tag;
mod task;

pub use board::Board;
pub use column::Column;
pub use drag::{DropOutcome, DropResult, TaskPosition};
pub use error::{BoardDomainError, InvariantViolation};
pub use ids::{BoardId, ColumnId, TagId, TaskId};
pub use store::BoardStore;
pub use tag::{Tag, TagCatalog};
pub use task::{NewTask, Task, TaskUpdate};
