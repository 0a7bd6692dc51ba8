//! Behaviour tests for optimistic task reordering.

#[path = "task_reorder_steps/mod.rs"]
mod task_reorder_steps_defs;

use rstest_bdd_macros::scenario;
use task_reorder_steps_defs::world::{ReorderWorld, world};

#[scenario(
    path = "tests/features/task_reordering.feature",
    name = "Rejected reorder is rolled back"
)]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_reorder_is_rolled_back(world: ReorderWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_reordering.feature",
    name = "Accepted reorder is kept and confirmed on reload"
)]
#[tokio::test(flavor = "multi_thread")]
async fn accepted_reorder_is_kept(world: ReorderWorld) {
    let _ = world;
}
