//! In-memory integration tests for direct gateway operations.

use super::helpers::{Harness, harness, open_task};
use rstest::{fixture, rstest};
use taskbid_client::credential::domain::Role;
use taskbid_client::gateway::GatewayError;
use taskbid_client::gateway::domain::{
    CreateTaskRequest, LoginRequest, PriceQuote, TaskStatus, TaskSummary,
};
use taskbid_client::gateway::ports::MarketplaceApi;

#[fixture]
fn world() -> Harness {
    harness()
}

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "ivan@example.com".to_owned(),
        password: "secret".to_owned(),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_persists_token_and_role_hint(world: Harness) {
    world
        .marketplace
        .issue_role(Role::Executor)
        .expect("issue role");

    let response = world
        .marketplace
        .login(&login_request())
        .await
        .expect("login should succeed");

    assert_eq!(world.credentials.token(), Some(response.token));
    assert_eq!(world.credentials.role(), Some(Role::Executor));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_clears_token_and_role(world: Harness) {
    world
        .marketplace
        .issue_role(Role::Customer)
        .expect("issue role");
    world
        .marketplace
        .login(&login_request())
        .await
        .expect("login should succeed");

    world.credentials.clear().expect("logout should succeed");

    assert_eq!(world.credentials.token(), None);
    assert_eq!(world.credentials.role(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn forbidden_recommendations_read_as_empty(world: Harness) {
    world
        .marketplace
        .seed_recommendations(vec![TaskSummary {
            id: taskbid_client::gateway::domain::TaskId::new(7),
            title: "Paint a fence".to_owned(),
            status: TaskStatus::Open,
            city: None,
            begin_date: None,
        }])
        .expect("seed recommendations");
    world
        .marketplace
        .forbid_recommendations()
        .expect("forbid recommendations");

    let listed = world
        .marketplace
        .list_recommendations()
        .await
        .expect("listing must not fail for non-executors");

    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_appears_in_own_and_global_listings(world: Harness) {
    world
        .marketplace
        .create_task(&CreateTaskRequest::new("Assemble shelves").with_city("Minsk"))
        .await
        .expect("create task");

    let mine = world
        .marketplace
        .list_my_tasks()
        .await
        .expect("list my tasks");
    let all = world
        .marketplace
        .list_all_tasks()
        .await
        .expect("list all tasks");

    assert_eq!(mine.len(), 1);
    assert_eq!(mine.first().map(|t| t.title.as_str()), Some("Assemble shelves"));
    assert_eq!(all.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bid_shows_up_in_applications_and_counts(world: Harness) -> Result<(), eyre::Report> {
    let id = world
        .marketplace
        .seed_own_task(open_task("Fix a leaking tap"))
        .expect("seed task");
    let price = PriceQuote::new("50 BYN")?;

    world
        .marketplace
        .apply_to_task(id, &price)
        .await
        .expect("apply should succeed");

    let rows = world
        .marketplace
        .list_my_applications()
        .await
        .expect("list applications");
    eyre::ensure!(rows.len() == 1, "expected one application row");
    let row = rows.first().ok_or_else(|| eyre::eyre!("missing row"))?;
    eyre::ensure!(row.task_id == id, "row points at the wrong task");

    let counts = world
        .marketplace
        .list_my_task_application_counts()
        .await
        .expect("list counts");
    eyre::ensure!(
        counts.iter().any(|c| c.task_id == id && c.count == 1),
        "expected a count of one bid for the seeded task"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn only_open_tasks_can_be_deleted(world: Harness) {
    let mut assigned = open_task("Walk a dog");
    assigned.status = TaskStatus::ReadyForWork;
    let busy = world.marketplace.seed_task(assigned).expect("seed task");
    let idle = world
        .marketplace
        .seed_task(open_task("Paint a fence"))
        .expect("seed task");

    let refused = world
        .marketplace
        .delete_task(busy)
        .await
        .expect_err("deleting an assigned task must fail");
    assert!(matches!(refused, GatewayError::Server { status: 409, .. }));

    world
        .marketplace
        .delete_task(idle)
        .await
        .expect("deleting an open task should succeed");
    let gone = world
        .marketplace
        .fetch_task(idle)
        .await
        .expect_err("deleted task must be gone");
    assert!(matches!(gone, GatewayError::Server { status: 404, .. }));
}
