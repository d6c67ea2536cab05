//! When steps for board workflow BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::domain::{DropResult, TaskPosition};

#[when(
    r#"task "{title}" is dragged from "{source}" index {source_index:usize} to "{destination}" index {destination_index:usize}"#
)]
fn task_is_dragged(
    world: &mut BoardWorld,
    title: String,
    source: String,
    source_index: usize,
    destination: String,
    destination_index: usize,
) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    let drop = DropResult::task(
        world.task_id(&title)?,
        TaskPosition::new(world.column_id(&source)?, source_index),
        TaskPosition::new(world.column_id(&destination)?, destination_index),
    );
    run_async(world.session.handle_drop(board_id, drop)).wrap_err("handle drop")?;
    Ok(())
}

#[when(r#"the drag of task "{title}" from "{source}" index {source_index:usize} is cancelled"#)]
fn drag_is_cancelled(
    world: &mut BoardWorld,
    title: String,
    source: String,
    source_index: usize,
) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    let column_id = world.column_id(&source)?;
    let position = TaskPosition::new(column_id, source_index);
    let drop = DropResult::task(world.task_id(&title)?, position, position).cancelled();
    world.saves_before_drag = Some(world.persistence.save_count()?);
    run_async(world.session.handle_drop(board_id, drop)).wrap_err("handle cancelled drop")?;
    Ok(())
}

#[when(r#"column "{title}" is deleted"#)]
fn column_is_deleted(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    let column_id = world.column_id(&title)?;
    run_async(world.session.delete_column(board_id, column_id)).wrap_err("delete column")?;
    world.columns.remove(&title);
    Ok(())
}
