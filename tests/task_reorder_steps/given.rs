//! Given steps for task reordering BDD scenarios.

use super::world::{ReorderWorld, parse_ids, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::domain::{BoardId, BoardPayload, ColumnId, ColumnPayload, Task};

const BOARD: BoardId = BoardId::new(1);

fn column_payload(column: u64, tasks: &str) -> Result<ColumnPayload, eyre::Report> {
    let id = ColumnId::new(column);
    let records = parse_ids(tasks)?
        .into_iter()
        .map(|task| Task::new(task, format!("Task {task}"), id))
        .collect();
    Ok(ColumnPayload::new(id, records))
}

#[given(r#"a board with column {first:u64} holding "{first_tasks}" and column {second:u64} holding "{second_tasks}""#)]
fn board_with_columns(
    world: &mut ReorderWorld,
    first: u64,
    first_tasks: String,
    second: u64,
    second_tasks: String,
) -> Result<(), eyre::Report> {
    world.remote.insert_board(BoardPayload::new(
        BOARD,
        vec![
            column_payload(first, &first_tasks)?,
            column_payload(second, &second_tasks)?,
        ],
    ));
    run_async(world.sync.load(BOARD)).wrap_err("load board for reorder scenario")?;
    Ok(())
}

#[given(r#"the server will reject the next request with "{message}""#)]
fn server_rejects_next(world: &mut ReorderWorld, message: String) {
    world.remote.fail_next(message);
}
