//! Then steps for board workflow BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;
use taskboard::board::snapshot::decode_snapshot;

#[then(r#"the task count of column "{column}" is {count:usize}"#)]
fn column_task_count(
    world: &BoardWorld,
    column: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let column_id = world.column_id(&column)?;
    let listed = world
        .board()?
        .column(column_id)
        .ok_or_else(|| eyre::eyre!("column {column:?} missing from board"))?
        .task_ids()
        .len();

    if listed != count {
        return Err(eyre::eyre!(
            "expected {count} tasks in {column:?}, found {listed}"
        ));
    }

    Ok(())
}

#[then(r#"column "{column}" lists task "{title}" at index {index:usize}"#)]
fn column_lists_task_at(
    world: &BoardWorld,
    column: String,
    title: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let column_id = world.column_id(&column)?;
    let task_id = world.task_id(&title)?;
    let found = world
        .board()?
        .column(column_id)
        .ok_or_else(|| eyre::eyre!("column {column:?} missing from board"))?
        .task_ids()
        .get(index)
        .copied();

    if found != Some(task_id) {
        return Err(eyre::eyre!(
            "expected task {title:?} at {column:?}[{index}], found {found:?}"
        ));
    }

    Ok(())
}

#[then("the board holds {count:usize} task")]
fn board_holds_tasks(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.board()?.tasks().len();
    if held != count {
        return Err(eyre::eyre!("expected {count} tasks on board, found {held}"));
    }
    Ok(())
}

#[then(r#"the board columns are "{titles}""#)]
fn board_columns_are(world: &BoardWorld, titles: String) -> Result<(), eyre::Report> {
    let actual: Vec<&str> = world
        .board()?
        .ordered_columns()
        .map(|column| column.title())
        .collect();
    let expected: Vec<&str> = titles.split(", ").collect();

    if actual != expected {
        return Err(eyre::eyre!("expected columns {expected:?}, found {actual:?}"));
    }

    Ok(())
}

#[then("the saved snapshot matches the session")]
fn snapshot_matches_session(world: &BoardWorld) -> Result<(), eyre::Report> {
    let blob = world
        .persistence
        .blob()?
        .ok_or_else(|| eyre::eyre!("no snapshot saved"))?;
    let stored = decode_snapshot(&blob)?;

    if stored != world.session.boards() {
        return Err(eyre::eyre!("saved snapshot differs from session state"));
    }

    Ok(())
}

#[then("no snapshot was saved after the drag")]
fn no_save_after_drag(world: &BoardWorld) -> Result<(), eyre::Report> {
    let before = world
        .saves_before_drag
        .ok_or_else(|| eyre::eyre!("drag was not recorded in scenario world"))?;
    let after = world.persistence.save_count()?;

    if after != before {
        return Err(eyre::eyre!("expected {before} saves, found {after}"));
    }

    Ok(())
}
