//! Shared world state for task view gating BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskbid_client::credential::adapters::memory::InMemoryTokenStore;
use taskbid_client::credential::domain::Role;
use taskbid_client::credential::services::CredentialStore;
use taskbid_client::gateway::adapters::memory::InMemoryMarketplace;
use taskbid_client::gateway::domain::{ApplicationId, TaskId};
use taskbid_client::lifecycle::domain::NavigationContext;
use taskbid_client::view::services::{TaskView, TaskViewResult, TaskViewService};

/// Scenario world for task view gating behaviour tests.
pub struct TaskViewWorld {
    pub marketplace: Arc<InMemoryMarketplace<InMemoryTokenStore>>,
    pub service: TaskViewService<InMemoryMarketplace<InMemoryTokenStore>>,
    pub role: Option<Role>,
    pub navigation: NavigationContext,
    pub task_id: Option<TaskId>,
    pub pending_application: Option<ApplicationId>,
    pub view: Option<TaskView>,
    pub last_result: Option<TaskViewResult<()>>,
    pub last_load_superseded: Option<bool>,
}

impl TaskViewWorld {
    /// Creates a world over a fresh in-memory marketplace.
    #[must_use]
    pub fn new() -> Self {
        let credentials = Arc::new(
            CredentialStore::open(Arc::new(InMemoryTokenStore::new()))
                .expect("in-memory token store cannot fail to open"),
        );
        let marketplace = Arc::new(InMemoryMarketplace::new(credentials));
        let service = TaskViewService::new(Arc::clone(&marketplace));

        Self {
            marketplace,
            service,
            role: None,
            navigation: NavigationContext::visitor(),
            task_id: None,
            pending_application: None,
            view: None,
            last_result: None,
            last_load_superseded: None,
        }
    }
}

impl Default for TaskViewWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskViewWorld {
    TaskViewWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
