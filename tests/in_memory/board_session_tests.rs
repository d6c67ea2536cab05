//! Board, column and task lifecycles driven through a session.

use std::sync::Arc;

use rstest::rstest;
use taskboard::board::{
    adapters::memory::InMemoryBoardPersistence,
    domain::{TagId, TaskUpdate},
};

use super::helpers::{create_sprint, open_session, persistence};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn session_state_survives_reopen(persistence: Arc<InMemoryBoardPersistence>) {
    let mut session = open_session(&persistence).await.expect("open session");
    let sprint = create_sprint(&mut session).await.expect("create sprint");
    session
        .set_task_tags(sprint.board_id, sprint.first, &[TagId::new("1")])
        .await
        .expect("tag task");
    session
        .toggle_task_completed(sprint.board_id, sprint.second)
        .await
        .expect("complete task");

    let reopened = open_session(&persistence).await.expect("reopen session");

    assert_eq!(reopened.store(), session.store());
    let board = reopened.board(sprint.board_id).expect("board restored");
    let second = board.task(sprint.second).expect("task restored");
    assert!(second.is_completed());
    assert_eq!(second.description(), "with the team");
    let first = board.task(sprint.first).expect("task restored");
    assert_eq!(first.tags().first().map(|tag| tag.name.as_str()), Some("Urgent"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_column_cascades_to_saved_snapshot(
    persistence: Arc<InMemoryBoardPersistence>,
) {
    let mut session = open_session(&persistence).await.expect("open session");
    let sprint = create_sprint(&mut session).await.expect("create sprint");

    session
        .delete_column(sprint.board_id, sprint.todo)
        .await
        .expect("delete Todo");

    let reopened = open_session(&persistence).await.expect("reopen session");
    let board = reopened.board(sprint.board_id).expect("board restored");
    assert_eq!(board.column_order(), &[sprint.doing]);
    assert!(board.tasks().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_deletes_leave_saved_state_unchanged(
    persistence: Arc<InMemoryBoardPersistence>,
) {
    let mut session = open_session(&persistence).await.expect("open session");
    let sprint = create_sprint(&mut session).await.expect("create sprint");
    session
        .delete_task(sprint.board_id, sprint.first)
        .await
        .expect("first delete");
    let blob = persistence.blob().expect("read blob");
    let saves = persistence.save_count().expect("save count");

    let second = session.delete_task(sprint.board_id, sprint.first).await;

    assert!(second.is_err_and(|err| err.is_not_found()));
    assert_eq!(persistence.blob().expect("read blob"), blob);
    assert_eq!(persistence.save_count().expect("save count"), saves);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn selection_follows_board_lifecycle(persistence: Arc<InMemoryBoardPersistence>) {
    let mut session = open_session(&persistence).await.expect("open session");
    let sprint = create_sprint(&mut session).await.expect("create sprint");

    let selected = session.select_board(sprint.board_id).expect("select board");
    assert_eq!(selected.name(), "Sprint");
    session
        .rename_board(sprint.board_id, "Sprint 2")
        .await
        .expect("rename board");
    assert_eq!(
        session.active_board().map(|board| board.name()),
        Some("Sprint 2")
    );

    session
        .delete_board(sprint.board_id)
        .await
        .expect("delete board");
    assert!(session.active_board().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edits_merge_only_present_fields(persistence: Arc<InMemoryBoardPersistence>) {
    let mut session = open_session(&persistence).await.expect("open session");
    let sprint = create_sprint(&mut session).await.expect("create sprint");

    session
        .edit_task(
            sprint.board_id,
            sprint.second,
            TaskUpdate::new().with_title("Review carefully"),
        )
        .await
        .expect("edit title");

    let board = session.board(sprint.board_id).expect("board");
    let task = board.task(sprint.second).expect("task");
    assert_eq!(task.title(), "Review carefully");
    assert_eq!(task.description(), "with the team");
    assert!(!task.is_completed());
}
