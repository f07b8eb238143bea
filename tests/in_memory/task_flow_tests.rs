//! In-memory integration tests for the full task view protocol.

use std::sync::Arc;

use super::helpers::{Harness, harness, open_task};
use rstest::{fixture, rstest};
use taskbid_client::credential::domain::Role;
use taskbid_client::gateway::domain::{ApplicationId, ApplicationStatus, TaskId, TaskStatus};
use taskbid_client::gateway::ports::MarketplaceApi;
use taskbid_client::lifecycle::domain::NavigationContext;
use taskbid_client::view::services::{TaskView, TaskViewService};

type TestService = TaskViewService<super::helpers::TestMarketplace>;

#[fixture]
fn world() -> Harness {
    harness()
}

fn service(world: &Harness) -> TestService {
    TaskViewService::new(Arc::clone(&world.marketplace))
}

async fn load_as(
    service: &TestService,
    id: TaskId,
    role: Role,
    navigation: NavigationContext,
) -> Result<TaskView, eyre::Report> {
    let tag = service.begin_load();
    service
        .load(tag, id, Some(role), navigation)
        .await
        .map_err(|err| eyre::eyre!("load failed: {err}"))?
        .into_view()
        .ok_or_else(|| eyre::eyre!("fresh load was unexpectedly superseded"))
}

fn sole_applicant_id(view: &TaskView) -> Result<ApplicationId, eyre::Report> {
    let applicants = &view.snapshot().applicants;
    eyre::ensure!(
        applicants.len() == 1,
        "expected exactly one applicant, found {}",
        applicants.len()
    );
    applicants
        .first()
        .map(|a| a.application_id)
        .ok_or_else(|| eyre::eyre!("missing applicant"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_walks_from_bid_to_acceptance(world: Harness) -> Result<(), eyre::Report> {
    let service = service(&world);
    let id = world
        .marketplace
        .seed_own_task(open_task("Fix a leaking tap"))
        .expect("seed task");

    // An executor visits the open task and bids.
    let mut executor_view =
        load_as(&service, id, Role::Executor, NavigationContext::visitor()).await?;
    eyre::ensure!(executor_view.plan().can_apply, "visitor should be offered apply");
    service
        .apply_with_price(&mut executor_view, " 50 BYN ")
        .await
        .map_err(|err| eyre::eyre!("apply failed: {err}"))?;
    eyre::ensure!(executor_view.has_applied(), "bid should be remembered");
    eyre::ensure!(
        !executor_view.plan().can_apply,
        "apply must be hidden after bidding"
    );

    // The author reviews the bid and approves it.
    let mut author_view = load_as(&service, id, Role::Customer, NavigationContext::author()).await?;
    eyre::ensure!(author_view.plan().show_applicants, "author should see the bids");
    eyre::ensure!(author_view.plan().can_delete, "open task should be deletable");
    let application = sole_applicant_id(&author_view)?;
    service
        .approve(&mut author_view, application)
        .await
        .map_err(|err| eyre::eyre!("approve failed: {err}"))?;
    eyre::ensure!(
        author_view.snapshot().status() == TaskStatus::ReadyForWork,
        "approval should move the task to READY_FOR_WORK"
    );
    eyre::ensure!(
        author_view.plan().show_assigned_executor,
        "author should now see the assigned executor"
    );
    eyre::ensure!(
        author_view.snapshot().applicants.is_empty(),
        "applicants are an OPEN-only view"
    );

    let rows = world
        .marketplace
        .list_my_applications()
        .await
        .expect("list applications");
    eyre::ensure!(
        rows.iter()
            .any(|row| row.application_id == application
                && row.status == ApplicationStatus::Accepted),
        "the approved bid should read as accepted"
    );

    // The accepted executor walks the work states.
    let mut work_view = load_as(
        &service,
        id,
        Role::Executor,
        NavigationContext::from_my_applications(ApplicationStatus::Accepted),
    )
    .await?;
    eyre::ensure!(work_view.plan().can_start_work, "executor should start work");
    service
        .start_work(&mut work_view)
        .await
        .map_err(|err| eyre::eyre!("start work failed: {err}"))?;
    eyre::ensure!(work_view.plan().can_finish_work, "executor should finish work");
    service
        .finish_work(&mut work_view)
        .await
        .map_err(|err| eyre::eyre!("finish work failed: {err}"))?;
    eyre::ensure!(
        work_view.snapshot().status() == TaskStatus::ReadyForAcceptance,
        "finished work awaits acceptance"
    );

    // The author accepts the finished work and leaves the view.
    let final_view = load_as(&service, id, Role::Customer, NavigationContext::author()).await?;
    eyre::ensure!(
        final_view.plan().can_complete_task,
        "author should be offered acceptance"
    );
    service
        .complete(final_view)
        .await
        .map_err(|(err, _)| eyre::eyre!("complete failed: {err}"))?;

    let done = load_as(&service, id, Role::Customer, NavigationContext::author()).await?;
    eyre::ensure!(
        done.snapshot().status() == TaskStatus::Done,
        "accepted work is DONE"
    );
    eyre::ensure!(
        !done.plan().grants_any_action(),
        "a terminal task grants nothing"
    );
    eyre::ensure!(
        done.plan().next_expected_status.is_none(),
        "a terminal task has no successor"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_delete_hands_the_view_back(world: Harness) -> Result<(), eyre::Report> {
    let service = service(&world);
    let mut assigned = open_task("Walk a dog");
    assigned.status = TaskStatus::ReadyForWork;
    let id = world.marketplace.seed_own_task(assigned).expect("seed task");

    let view = load_as(&service, id, Role::Customer, NavigationContext::author()).await?;
    let Err((_, returned)) = service.delete(view).await else {
        eyre::bail!("deleting an assigned task must fail");
    };

    eyre::ensure!(returned.task_id() == id, "the untouched view comes back");
    Ok(())
}
