//! Then steps for task view gating BDD scenarios.

use super::world::TaskViewWorld;
use rstest_bdd_macros::then;
use taskbid_client::gateway::domain::TaskStatus;
use taskbid_client::view::services::{TaskView, TaskViewError};

fn loaded_view(world: &TaskViewWorld) -> Result<&TaskView, eyre::Report> {
    world
        .view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing loaded view in scenario world"))
}

#[then("the operation succeeds")]
fn operation_succeeds(world: &TaskViewWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("operation failed: {err}")),
        None => Err(eyre::eyre!("no operation was performed")),
    }
}

#[then("the view is marked as applied")]
fn view_marked_applied(world: &TaskViewWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(loaded_view(world)?.has_applied(), "view is not marked as applied");
    Ok(())
}

#[then("the apply action is hidden")]
fn apply_hidden(world: &TaskViewWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !loaded_view(world)?.plan().can_apply,
        "apply action is still offered"
    );
    Ok(())
}

#[then("the bid is rejected for an empty price")]
fn rejected_for_empty_price(world: &TaskViewWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(TaskViewError::EmptyPrice(_))) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("wrong failure kind: {err}")),
        Some(Ok(())) => Err(eyre::eyre!("bid was unexpectedly accepted")),
        None => Err(eyre::eyre!("no operation was performed")),
    }
}

#[then("no apply call reached the server")]
fn no_apply_call(world: &TaskViewWorld) -> Result<(), eyre::Report> {
    let calls = world
        .marketplace
        .calls()
        .map_err(|err| eyre::eyre!("reading call counters: {err}"))?;
    eyre::ensure!(calls.apply == 0, "{} apply calls were issued", calls.apply);
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskViewWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let actual = loaded_view(world)?.snapshot().status();
    eyre::ensure!(
        actual == expected,
        "expected status {}, found {}",
        expected.as_str(),
        actual.as_str()
    );
    Ok(())
}

#[then("the assigned executor is shown")]
fn assigned_executor_shown(world: &TaskViewWorld) -> Result<(), eyre::Report> {
    let view = loaded_view(world)?;
    eyre::ensure!(
        view.plan().show_assigned_executor,
        "plan does not show the assigned executor"
    );
    eyre::ensure!(
        view.snapshot().executor.is_some(),
        "snapshot carries no executor"
    );
    Ok(())
}

#[then("the view has been left")]
fn view_has_been_left(world: &TaskViewWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.view.is_none(), "the view is still open");
    Ok(())
}

#[then("the stale load is discarded")]
fn stale_load_discarded(world: &TaskViewWorld) -> Result<(), eyre::Report> {
    match world.last_load_superseded {
        Some(true) => Ok(()),
        Some(false) => Err(eyre::eyre!("stale load produced a view")),
        None => Err(eyre::eyre!("no load was attempted")),
    }
}
