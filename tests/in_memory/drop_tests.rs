//! Drag-and-drop handling through a session.

use std::sync::Arc;

use rstest::rstest;
use taskboard::board::{
    adapters::memory::InMemoryBoardPersistence,
    domain::{BoardDomainError, DropOutcome, DropResult, TaskPosition},
    services::BoardSessionError,
};

use super::helpers::{create_sprint, open_session, persistence};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moved_task_order_is_persisted(persistence: Arc<InMemoryBoardPersistence>) {
    let mut session = open_session(&persistence).await.expect("open session");
    let sprint = create_sprint(&mut session).await.expect("create sprint");

    let outcome = session
        .handle_drop(
            sprint.board_id,
            DropResult::task(
                sprint.second,
                TaskPosition::new(sprint.todo, 1),
                TaskPosition::new(sprint.doing, 0),
            ),
        )
        .await
        .expect("move task");

    assert_eq!(outcome, DropOutcome::Moved);
    let reopened = open_session(&persistence).await.expect("reopen session");
    let board = reopened.board(sprint.board_id).expect("board restored");
    let todo = board.column(sprint.todo).expect("Todo");
    let doing = board.column(sprint.doing).expect("Doing");
    assert_eq!(todo.task_ids(), &[sprint.first]);
    assert_eq!(doing.task_ids(), &[sprint.second]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn column_reorder_is_persisted(persistence: Arc<InMemoryBoardPersistence>) {
    let mut session = open_session(&persistence).await.expect("open session");
    let sprint = create_sprint(&mut session).await.expect("create sprint");

    session
        .handle_drop(sprint.board_id, DropResult::column(sprint.todo, 0, 1))
        .await
        .expect("move Todo last");

    let reopened = open_session(&persistence).await.expect("reopen session");
    let board = reopened.board(sprint.board_id).expect("board restored");
    assert_eq!(board.column_order(), &[sprint.doing, sprint.todo]);
    let titles: Vec<&str> = board.ordered_columns().map(|column| column.title()).collect();
    assert_eq!(titles, vec!["Doing", "Todo"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_drop_is_rejected_without_saving(persistence: Arc<InMemoryBoardPersistence>) {
    let mut session = open_session(&persistence).await.expect("open session");
    let sprint = create_sprint(&mut session).await.expect("create sprint");
    let saves = persistence.save_count().expect("save count");

    let result = session
        .handle_drop(
            sprint.board_id,
            DropResult::task(
                sprint.first,
                TaskPosition::new(sprint.todo, 1),
                TaskPosition::new(sprint.doing, 0),
            ),
        )
        .await;

    assert!(matches!(
        result,
        Err(BoardSessionError::Domain(BoardDomainError::DragMismatch { index: 1, .. }))
    ));
    assert_eq!(persistence.save_count().expect("save count"), saves);
}
