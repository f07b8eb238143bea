//! When steps for task view gating BDD scenarios.

use super::world::{TaskViewWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the caller applies with the price "{price}""#)]
fn apply_with_price(world: &mut TaskViewWorld, price: String) -> Result<(), eyre::Report> {
    let view = world
        .view
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing loaded view in scenario world"))?;
    let result = run_async(world.service.apply_with_price(view, &price));
    world.last_result = Some(result);
    Ok(())
}

#[when("the author approves the pending bid")]
fn approve_pending_bid(world: &mut TaskViewWorld) -> Result<(), eyre::Report> {
    let application = world
        .pending_application
        .ok_or_else(|| eyre::eyre!("missing pending bid in scenario world"))?;
    let view = world
        .view
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing loaded view in scenario world"))?;
    let result = run_async(world.service.approve(view, application));
    world.last_result = Some(result);
    Ok(())
}

#[when("the caller starts work")]
fn start_work(world: &mut TaskViewWorld) -> Result<(), eyre::Report> {
    let view = world
        .view
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing loaded view in scenario world"))?;
    let result = run_async(world.service.start_work(view));
    world.last_result = Some(result);
    Ok(())
}

#[when("the caller finishes work")]
fn finish_work(world: &mut TaskViewWorld) -> Result<(), eyre::Report> {
    let view = world
        .view
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing loaded view in scenario world"))?;
    let result = run_async(world.service.finish_work(view));
    world.last_result = Some(result);
    Ok(())
}

#[when("the author accepts the finished work")]
fn accept_finished_work(world: &mut TaskViewWorld) -> Result<(), eyre::Report> {
    let view = world
        .view
        .take()
        .ok_or_else(|| eyre::eyre!("missing loaded view in scenario world"))?;
    match run_async(world.service.complete(view)) {
        Ok(()) => world.last_result = Some(Ok(())),
        Err((err, view)) => {
            world.view = Some(view);
            world.last_result = Some(Err(err));
        }
    }
    Ok(())
}

#[when("a load begins and is immediately superseded")]
fn superseded_load(world: &mut TaskViewWorld) -> Result<(), eyre::Report> {
    let id = world
        .task_id
        .ok_or_else(|| eyre::eyre!("missing seeded task in scenario world"))?;
    let stale = world.service.begin_load();
    let _newer = world.service.begin_load();
    let outcome = run_async(world.service.load(stale, id, world.role, world.navigation))?;
    world.last_load_superseded = Some(outcome.into_view().is_none());
    Ok(())
}
