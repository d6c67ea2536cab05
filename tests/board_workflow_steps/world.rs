//! Shared world state for board workflow BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use rstest::fixture;
use taskboard::board::{
    adapters::{ids::SequentialIdGenerator, memory::InMemoryBoardPersistence},
    domain::{Board, BoardId, ColumnId, TagCatalog, TaskId},
    services::BoardSession,
};

/// Session type used by the BDD world.
pub type TestBoardSession = BoardSession<InMemoryBoardPersistence, SequentialIdGenerator>;

/// Scenario world for board workflow behaviour tests.
pub struct BoardWorld {
    pub persistence: Arc<InMemoryBoardPersistence>,
    pub session: TestBoardSession,
    pub board_id: Option<BoardId>,
    pub columns: HashMap<String, ColumnId>,
    pub tasks: HashMap<String, TaskId>,
    pub saves_before_drag: Option<usize>,
}

impl BoardWorld {
    /// Creates a world with an empty session.
    #[must_use]
    pub fn new() -> Self {
        let persistence = Arc::new(InMemoryBoardPersistence::new());
        let session = BoardSession::new(
            Arc::clone(&persistence),
            Arc::new(SequentialIdGenerator::new()),
            TagCatalog::default(),
        );

        Self {
            persistence,
            session,
            board_id: None,
            columns: HashMap::new(),
            tasks: HashMap::new(),
            saves_before_drag: None,
        }
    }

    /// Returns the scenario board identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when no board has been created yet.
    pub fn board_id(&self) -> Result<BoardId, eyre::Report> {
        self.board_id
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Returns the scenario board.
    ///
    /// # Errors
    ///
    /// Returns an error when the board is missing from the session.
    pub fn board(&self) -> Result<&Board, eyre::Report> {
        let board_id = self.board_id()?;
        self.session
            .board(board_id)
            .ok_or_else(|| eyre::eyre!("board {board_id} missing from session"))
    }

    /// Resolves a column title to its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when the scenario never created the column.
    pub fn column_id(&self, title: &str) -> Result<ColumnId, eyre::Report> {
        self.columns
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown column {title:?} in scenario world"))
    }

    /// Resolves a task title to its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when the scenario never created the task.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown task {title:?} in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
