//! Given steps for board transition BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::domain::TaskStatus;
use taskboard::task::ports::{TaskRemote, TaskRemoteError};
use taskboard::task::services::TaskService;
use std::sync::Arc;

#[given(r#"a project with a task named "{name}" in "{status}""#)]
fn project_with_task(
    world: &mut BoardWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;

    let service = TaskService::new(Arc::clone(&world.remote));
    let created = run_async(service.create(&world.project, &name, "scenario task"))
        .wrap_err("seed task for scenario")?;
    if target != TaskStatus::Pending {
        run_async(world.remote.set_status(&world.project, created.id(), target))
            .wrap_err("seed task status for scenario")?;
    }
    world.task = Some(created.id().clone());

    run_async(world.manager_controller.load_board()).wrap_err("load board for scenario")?;
    world.dispatches_after_setup = world.remote.status_dispatches();
    Ok(())
}

#[given("the remote will fail the next status change")]
fn remote_fails_next(world: &mut BoardWorld) {
    world
        .remote
        .fail_next(TaskRemoteError::Validation("scenario failure".to_owned()));
}
