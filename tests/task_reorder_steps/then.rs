//! Then steps for task reordering BDD scenarios.

use super::world::{ReorderWorld, parse_ids, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskboard::{
    task::adapters::memory::Notification,
    task::domain::{BoardId, ColumnId, TaskId},
    task::ports::NotificationKind,
    task::services::ReorderOutcome,
};

#[then(r#"column {column:u64} holds tasks "{tasks}""#)]
fn column_holds(world: &ReorderWorld, column: u64, tasks: String) -> Result<(), eyre::Report> {
    let expected = parse_ids(&tasks)?;
    let actual = world.column(column);
    if actual != expected {
        return Err(eyre::eyre!(
            "expected column {column} to hold {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

fn expect_notification(
    world: &ReorderWorld,
    kind: NotificationKind,
    message: String,
) -> Result<(), eyre::Report> {
    let expected = Notification::new(kind, message);
    let last = world.notifier.last();
    if last.as_ref() != Some(&expected) {
        return Err(eyre::eyre!("expected {expected:?}, found {last:?}"));
    }
    Ok(())
}

#[then(r#"an error notification "{message}" is shown"#)]
fn error_notification_shown(world: &ReorderWorld, message: String) -> Result<(), eyre::Report> {
    if !matches!(world.last_outcome, Some(ReorderOutcome::RolledBack(_))) {
        return Err(eyre::eyre!(
            "expected a rolled back reorder, found {:?}",
            world.last_outcome
        ));
    }
    expect_notification(world, NotificationKind::Error, message)
}

#[then(r#"a success notification "{message}" is shown"#)]
fn success_notification_shown(world: &ReorderWorld, message: String) -> Result<(), eyre::Report> {
    if world.last_outcome != Some(ReorderOutcome::Reconciled) {
        return Err(eyre::eyre!(
            "expected a reconciled reorder, found {:?}",
            world.last_outcome
        ));
    }
    expect_notification(world, NotificationKind::Success, message)
}

#[then("task {task:u64} belongs to column {column:u64} after the board is reloaded")]
fn task_belongs_after_reload(
    world: &ReorderWorld,
    task: u64,
    column: u64,
) -> Result<(), eyre::Report> {
    run_async(world.sync.load(BoardId::new(1))).wrap_err("reload board")?;
    let recorded = world
        .board
        .read(|store| store.task(TaskId::new(task)).map(|record| record.column()));
    if recorded != Some(ColumnId::new(column)) {
        return Err(eyre::eyre!(
            "expected task {task} in column {column}, found {recorded:?}"
        ));
    }
    Ok(())
}
