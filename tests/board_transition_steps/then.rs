//! Then steps for board transition BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskboard::board::services::{BoardError, DragOutcome, TransitionOutcome};
use taskboard::task::domain::TaskStatus;

fn last_result(world: &BoardWorld) -> Result<&Result<DragOutcome, BoardError>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing drag result in scenario world"))
}

fn parse_column(column: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(column).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

#[then("the transition commits")]
fn transition_commits(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(
        result,
        Ok(DragOutcome::Settled(TransitionOutcome::Committed { .. }))
    ) {
        return Err(eyre::eyre!("expected a committed transition, got {result:?}"));
    }
    Ok(())
}

#[then("the transition rolls back")]
fn transition_rolls_back(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(
        result,
        Ok(DragOutcome::Settled(TransitionOutcome::RolledBack { .. }))
    ) {
        return Err(eyre::eyre!("expected a rolled-back transition, got {result:?}"));
    }
    Ok(())
}

#[then("the drag is rejected as unauthorized")]
fn drag_rejected_unauthorized(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(BoardError::Unauthorized)) {
        return Err(eyre::eyre!("expected an unauthorized rejection, got {result:?}"));
    }
    Ok(())
}

#[then("the gesture is ignored")]
fn gesture_ignored(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Ok(DragOutcome::Ignored)) {
        return Err(eyre::eyre!("expected an ignored gesture, got {result:?}"));
    }
    Ok(())
}

#[then("no status dispatch reaches the remote")]
fn no_status_dispatch(world: &BoardWorld) -> Result<(), eyre::Report> {
    let dispatches = world.remote.status_dispatches();
    if dispatches != world.dispatches_after_setup {
        return Err(eyre::eyre!(
            "expected no status dispatch, found {} new",
            dispatches - world.dispatches_after_setup
        ));
    }
    Ok(())
}

#[then("a success notification is recorded")]
fn success_notification_recorded(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.notifier.success_count() != 1 {
        return Err(eyre::eyre!(
            "expected exactly one success notification, found {}",
            world.notifier.success_count()
        ));
    }
    Ok(())
}

#[then("a failure notification is recorded exactly once")]
fn failure_notification_recorded_once(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.notifier.error_count() != 1 {
        return Err(eyre::eyre!(
            "expected exactly one failure notification, found {}",
            world.notifier.error_count()
        ));
    }
    Ok(())
}

#[then("no notification is recorded")]
fn no_notification_recorded(world: &BoardWorld) -> Result<(), eyre::Report> {
    let entries = world.notifier.entries();
    if !entries.is_empty() {
        return Err(eyre::eyre!("expected no notifications, found {entries:?}"));
    }
    Ok(())
}

#[then(r#"the board still shows the task under "{column}""#)]
fn board_still_shows(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let status = parse_column(&column)?;
    let task = world.seeded_task()?;
    let board = world
        .manager_controller
        .board()
        .ok_or_else(|| eyre::eyre!("board should still be readable without a refetch"))?;
    if !board
        .column(status)
        .iter()
        .any(|summary| summary.id() == task)
    {
        return Err(eyre::eyre!("task not under {column} on the local board"));
    }
    Ok(())
}

#[then(r#"the board after refetch shows the task under "{column}""#)]
fn board_after_refetch_shows(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let status = parse_column(&column)?;
    let task = world.seeded_task()?;
    // The next authoritative refetch: drop local state, reload.
    world.cache.invalidate(&world.project);
    let board = run_async(world.manager_controller.load_board())
        .wrap_err("refetch board for scenario")?;
    if !board
        .column(status)
        .iter()
        .any(|summary| summary.id() == task)
    {
        return Err(eyre::eyre!("task not under {column} after refetch"));
    }
    Ok(())
}
