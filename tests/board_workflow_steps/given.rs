//! Given steps for board workflow BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::domain::NewTask;

#[given(r#"a board named "{name}""#)]
fn board_named(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let board_id = run_async(world.session.create_board(name)).wrap_err("create board")?;
    world.board_id = Some(board_id);
    Ok(())
}

#[given(r#"the board has a column "{title}""#)]
fn board_has_column(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    let column_id = run_async(world.session.add_column(board_id, title.clone()))
        .wrap_err("add column")?;
    world.columns.insert(title, column_id);
    Ok(())
}

#[given(r#"column "{column}" has a task "{title}""#)]
fn column_has_task(
    world: &mut BoardWorld,
    column: String,
    title: String,
) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    let column_id = world.column_id(&column)?;
    let task_id = run_async(world.session.add_task(
        board_id,
        column_id,
        NewTask::new(title.clone(), ""),
    ))
    .wrap_err("add task")?;
    world.tasks.insert(title, task_id);
    Ok(())
}
