//! When steps for board transition BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::board::domain::DragDropEvent;

#[when(r#"the manager drops the task onto "{column}""#)]
fn manager_drops(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let task = world.seeded_task()?.clone();
    let event = DragDropEvent::dropped(task.as_str(), column);
    let result = run_async(world.manager_controller.handle_drag_end(&event));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the collaborator drops the task onto "{column}""#)]
fn collaborator_drops(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let task = world.seeded_task()?.clone();
    let event = DragDropEvent::dropped(task.as_str(), column);
    let result = run_async(world.collaborator_controller.handle_drag_end(&event));
    world.last_result = Some(result);
    Ok(())
}

#[when("the drag gesture is canceled")]
fn gesture_canceled(world: &mut BoardWorld) {
    let result = run_async(
        world
            .manager_controller
            .handle_drag_end(&DragDropEvent::canceled()),
    );
    world.last_result = Some(result);
}
