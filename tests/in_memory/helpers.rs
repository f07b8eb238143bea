//! Shared fixtures for in-memory marketplace tests.

use std::sync::Arc;

use taskbid_client::credential::adapters::memory::InMemoryTokenStore;
use taskbid_client::credential::services::CredentialStore;
use taskbid_client::gateway::adapters::memory::InMemoryMarketplace;
use taskbid_client::gateway::domain::{TaskId, TaskSnapshot, TaskStatus};

/// Credential store type used by integration tests.
pub type TestCredentials = CredentialStore<InMemoryTokenStore>;

/// Marketplace fake type used by integration tests.
pub type TestMarketplace = InMemoryMarketplace<InMemoryTokenStore>;

/// A marketplace fake together with the credential store it logs in to.
pub struct Harness {
    pub credentials: Arc<TestCredentials>,
    pub marketplace: Arc<TestMarketplace>,
}

/// Creates a fresh marketplace over an empty in-memory token store.
#[must_use]
pub fn harness() -> Harness {
    let credentials = Arc::new(
        CredentialStore::open(Arc::new(InMemoryTokenStore::new()))
            .expect("in-memory token store cannot fail to open"),
    );
    let marketplace = Arc::new(InMemoryMarketplace::new(Arc::clone(&credentials)));
    Harness {
        credentials,
        marketplace,
    }
}

/// Builds a minimal `OPEN` task snapshot for seeding.
#[must_use]
pub fn open_task(title: &str) -> TaskSnapshot {
    TaskSnapshot {
        id: TaskId::new(0),
        title: title.to_owned(),
        description: None,
        city: None,
        status: TaskStatus::Open,
        required_skills: Vec::new(),
        created_at: None,
        applicants: Vec::new(),
        executor: None,
    }
}
