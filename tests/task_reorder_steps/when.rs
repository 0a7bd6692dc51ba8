//! When steps for task reordering BDD scenarios.

use super::world::{ReorderWorld, parse_ids, run_async};
use rstest_bdd_macros::when;
use taskboard::task::domain::{ColumnId, ColumnOrder};

#[when(r#"tasks are reordered to column {first:u64} holding "{first_tasks}" and column {second:u64} holding "{second_tasks}""#)]
fn reorder_tasks(
    world: &mut ReorderWorld,
    first: u64,
    first_tasks: String,
    second: u64,
    second_tasks: String,
) -> Result<(), eyre::Report> {
    let mut order = ColumnOrder::new();
    order.set_column(ColumnId::new(first), parse_ids(&first_tasks)?);
    order.set_column(ColumnId::new(second), parse_ids(&second_tasks)?);

    let outcome = run_async(world.coordinator.reorder(order));
    world.last_outcome = Some(outcome);
    Ok(())
}
