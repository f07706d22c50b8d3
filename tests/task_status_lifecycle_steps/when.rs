//! When steps for task status lifecycle BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::task::services::UpdateTaskRequest;

#[when("the task is advanced")]
fn task_is_advanced(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    world.last_advance_result = Some(run_async(world.service.advance_status(task_id)));
    Ok(())
}

#[when(r#"the task status is set to "{status}""#)]
fn task_status_is_set(world: &mut TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let result = run_async(
        world
            .service
            .update_task(UpdateTaskRequest::new(task_id).with_status(status)),
    );
    world.last_edit_result = Some(result);
    Ok(())
}
