//! In-memory marketplace for integration tests.
//!
//! Implements [`MarketplaceApi`] over shared in-memory state and reproduces
//! enough of the server-side state machine to exercise the projection and
//! view protocols: apply records a bid and conflicts on a duplicate,
//! approve assigns the executor and rejects the other bids, the work-state
//! transitions conflict when the task is in the wrong state, and delete is
//! accepted only while the task is `OPEN`. Per-operation call counters let
//! tests assert that no call was issued.

use crate::credential::domain::Role;
use crate::credential::ports::TokenStore;
use crate::credential::services::CredentialStore;
use crate::gateway::domain::{
    Application, ApplicationCount, ApplicationId, ApplicationStatus, CreateTaskRequest,
    ExecutorProfile, LoginRequest, LoginResponse, MyApplicationRow, OnboardingRequest, PriceQuote,
    RegisterRequest, SkillCategory, TaskId, TaskSnapshot, TaskStatus, TaskSummary,
};
use crate::gateway::ports::MarketplaceApi;
use crate::gateway::{GatewayError, GatewayResult};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

/// Number of calls issued per mutating operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounters {
    /// Calls to `apply_to_task`.
    pub apply: usize,
    /// Calls to `approve_application`.
    pub approve: usize,
    /// Calls to `fetch_task`.
    pub fetch_task: usize,
    /// Calls to `start_work`.
    pub start_work: usize,
    /// Calls to `finish_work`.
    pub finish_work: usize,
    /// Calls to `complete_task`.
    pub complete: usize,
    /// Calls to `delete_task`.
    pub delete: usize,
}

#[derive(Debug, Default)]
struct MarketplaceState {
    issued_role: Option<Role>,
    registered: Vec<RegisterRequest>,
    onboarded: Vec<OnboardingRequest>,
    skill_categories: Vec<SkillCategory>,
    next_task_id: u64,
    next_application_id: u64,
    tasks: BTreeMap<u64, TaskSnapshot>,
    owned: BTreeSet<u64>,
    applied: BTreeSet<u64>,
    my_applications: Vec<MyApplicationRow>,
    recommendations: Vec<TaskSummary>,
    recommendations_forbidden: bool,
    calls: CallCounters,
}

/// Thread-safe in-memory marketplace fake.
pub struct InMemoryMarketplace<S: TokenStore> {
    state: Arc<RwLock<MarketplaceState>>,
    credentials: Arc<CredentialStore<S>>,
}

fn lock_error(err: impl std::fmt::Display) -> GatewayError {
    GatewayError::transport(std::io::Error::other(err.to_string()))
}

fn summary_of(task: &TaskSnapshot) -> TaskSummary {
    TaskSummary {
        id: task.id,
        title: task.title.clone(),
        status: task.status,
        city: task.city.clone(),
        begin_date: None,
    }
}

/// Mints a JWT-shaped token whose payload carries the given role claim.
fn token_for(role: Option<Role>) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
    let payload = role.map_or_else(
        || URL_SAFE_NO_PAD.encode(b"{}"),
        |claim| URL_SAFE_NO_PAD.encode(format!(r#"{{"role":"{}"}}"#, claim.as_str())),
    );
    format!("{header}.{payload}.test-signature")
}

impl<S: TokenStore> InMemoryMarketplace<S> {
    /// Creates an empty marketplace bound to the given credential store.
    #[must_use]
    pub fn new(credentials: Arc<CredentialStore<S>>) -> Self {
        Self {
            state: Arc::new(RwLock::new(MarketplaceState {
                next_task_id: 1,
                next_application_id: 1,
                ..MarketplaceState::default()
            })),
            credentials,
        }
    }

    fn write(&self) -> GatewayResult<std::sync::RwLockWriteGuard<'_, MarketplaceState>> {
        self.state.write().map_err(lock_error)
    }

    fn read(&self) -> GatewayResult<std::sync::RwLockReadGuard<'_, MarketplaceState>> {
        self.state.read().map_err(lock_error)
    }

    /// Sets the role claim carried by tokens minted on login.
    ///
    /// # Errors
    ///
    /// Returns a transport-wrapped error when the state lock is poisoned.
    pub fn issue_role(&self, role: Role) -> GatewayResult<()> {
        self.write()?.issued_role = Some(role);
        Ok(())
    }

    /// Seeds a task under a fresh id and returns that id.
    ///
    /// # Errors
    ///
    /// Returns a transport-wrapped error when the state lock is poisoned.
    pub fn seed_task(&self, mut snapshot: TaskSnapshot) -> GatewayResult<TaskId> {
        let mut state = self.write()?;
        let id = state.next_task_id;
        state.next_task_id += 1;
        snapshot.id = TaskId::new(id);
        state.tasks.insert(id, snapshot);
        Ok(TaskId::new(id))
    }

    /// Seeds a task owned by the caller (visible in `list_my_tasks`).
    ///
    /// # Errors
    ///
    /// Returns a transport-wrapped error when the state lock is poisoned.
    pub fn seed_own_task(&self, snapshot: TaskSnapshot) -> GatewayResult<TaskId> {
        let id = self.seed_task(snapshot)?;
        self.write()?.owned.insert(id.into_inner());
        Ok(id)
    }

    /// Seeds the recommendation list.
    ///
    /// # Errors
    ///
    /// Returns a transport-wrapped error when the state lock is poisoned.
    pub fn seed_recommendations(&self, tasks: Vec<TaskSummary>) -> GatewayResult<()> {
        self.write()?.recommendations = tasks;
        Ok(())
    }

    /// Makes the recommendation endpoint behave as it does for callers
    /// without the executor role: an empty list, never an error.
    ///
    /// # Errors
    ///
    /// Returns a transport-wrapped error when the state lock is poisoned.
    pub fn forbid_recommendations(&self) -> GatewayResult<()> {
        self.write()?.recommendations_forbidden = true;
        Ok(())
    }

    /// Seeds the skill reference data.
    ///
    /// # Errors
    ///
    /// Returns a transport-wrapped error when the state lock is poisoned.
    pub fn seed_skill_categories(&self, categories: Vec<SkillCategory>) -> GatewayResult<()> {
        self.write()?.skill_categories = categories;
        Ok(())
    }

    /// Returns a snapshot of the per-operation call counters.
    ///
    /// # Errors
    ///
    /// Returns a transport-wrapped error when the state lock is poisoned.
    pub fn calls(&self) -> GatewayResult<CallCounters> {
        Ok(self.read()?.calls)
    }

    /// Returns the onboarding payloads submitted so far.
    ///
    /// # Errors
    ///
    /// Returns a transport-wrapped error when the state lock is poisoned.
    pub fn onboarded(&self) -> GatewayResult<Vec<OnboardingRequest>> {
        Ok(self.read()?.onboarded.clone())
    }
}

#[async_trait]
impl<S: TokenStore> MarketplaceApi for InMemoryMarketplace<S> {
    async fn register(&self, request: &RegisterRequest) -> GatewayResult<()> {
        self.write()?.registered.push(request.clone());
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> GatewayResult<LoginResponse> {
        let known = {
            let state = self.read()?;
            state.registered.is_empty()
                || state.registered.iter().any(|r| r.email == request.email)
        };
        if !known {
            return Err(GatewayError::Unauthorized("unknown account".to_owned()));
        }
        let token = token_for(self.read()?.issued_role);
        self.credentials.set(&token)?;
        Ok(LoginResponse { token })
    }

    async fn fetch_skill_categories(&self) -> GatewayResult<Vec<SkillCategory>> {
        Ok(self.read()?.skill_categories.clone())
    }

    async fn submit_onboarding(&self, request: &OnboardingRequest) -> GatewayResult<()> {
        self.write()?.onboarded.push(request.clone());
        Ok(())
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> GatewayResult<()> {
        let mut state = self.write()?;
        let id = state.next_task_id;
        state.next_task_id += 1;
        let snapshot = TaskSnapshot {
            id: TaskId::new(id),
            title: request.title.clone(),
            description: request.description.clone(),
            city: request.city.clone(),
            status: TaskStatus::Open,
            required_skills: Vec::new(),
            created_at: None,
            applicants: Vec::new(),
            executor: None,
        };
        state.tasks.insert(id, snapshot);
        state.owned.insert(id);
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> GatewayResult<()> {
        let mut state = self.write()?;
        state.calls.delete += 1;
        let Some(task) = state.tasks.get(&id.into_inner()) else {
            return Err(GatewayError::from_status(404, format!("no task {id}")));
        };
        if task.status != TaskStatus::Open {
            return Err(GatewayError::from_status(
                409,
                "only open tasks can be deleted".to_owned(),
            ));
        }
        state.tasks.remove(&id.into_inner());
        state.owned.remove(&id.into_inner());
        Ok(())
    }

    async fn list_my_tasks(&self) -> GatewayResult<Vec<TaskSummary>> {
        let state = self.read()?;
        Ok(state
            .owned
            .iter()
            .filter_map(|id| state.tasks.get(id).map(summary_of))
            .collect())
    }

    async fn list_all_tasks(&self) -> GatewayResult<Vec<TaskSummary>> {
        Ok(self.read()?.tasks.values().map(summary_of).collect())
    }

    async fn fetch_task(&self, id: TaskId) -> GatewayResult<TaskSnapshot> {
        let mut state = self.write()?;
        state.calls.fetch_task += 1;
        state
            .tasks
            .get(&id.into_inner())
            .cloned()
            .ok_or_else(|| GatewayError::from_status(404, format!("no task {id}")))
    }

    async fn list_recommendations(&self) -> GatewayResult<Vec<TaskSummary>> {
        let state = self.read()?;
        if state.recommendations_forbidden {
            return Ok(Vec::new());
        }
        Ok(state.recommendations.clone())
    }

    async fn apply_to_task(&self, id: TaskId, price: &PriceQuote) -> GatewayResult<()> {
        let mut state = self.write()?;
        state.calls.apply += 1;
        if state.applied.contains(&id.into_inner()) {
            return Err(GatewayError::AlreadyApplied);
        }
        let application_id = state.next_application_id;
        state.next_application_id += 1;
        let Some(task) = state.tasks.get_mut(&id.into_inner()) else {
            return Err(GatewayError::from_status(404, format!("no task {id}")));
        };
        if task.status != TaskStatus::Open {
            return Err(GatewayError::from_status(
                409,
                "task is no longer open".to_owned(),
            ));
        }
        task.applicants.push(Application {
            application_id: ApplicationId::new(application_id),
            profile_id: None,
            username: Some("caller".to_owned()),
            city: None,
            experience: None,
            description: None,
            skills: Vec::new(),
            price: Some(price.as_str().to_owned()),
            status: ApplicationStatus::Pending,
            created_at: None,
        });
        let row = MyApplicationRow {
            application_id: ApplicationId::new(application_id),
            task_id: id,
            task_title: Some(task.title.clone()),
            task_city: task.city.clone(),
            status: ApplicationStatus::Pending,
            created_at: None,
        };
        state.applied.insert(id.into_inner());
        state.my_applications.push(row);
        Ok(())
    }

    async fn list_my_applications(&self) -> GatewayResult<Vec<MyApplicationRow>> {
        Ok(self.read()?.my_applications.clone())
    }

    async fn list_my_task_application_counts(&self) -> GatewayResult<Vec<ApplicationCount>> {
        let state = self.read()?;
        Ok(state
            .owned
            .iter()
            .filter_map(|id| state.tasks.get(id))
            .filter(|task| !task.applicants.is_empty())
            .map(|task| ApplicationCount {
                task_id: task.id,
                count: task.applicants.len() as u64,
            })
            .collect())
    }

    async fn approve_application(
        &self,
        task: TaskId,
        application: ApplicationId,
    ) -> GatewayResult<()> {
        let mut state = self.write()?;
        state.calls.approve += 1;
        let Some(snapshot) = state.tasks.get_mut(&task.into_inner()) else {
            return Err(GatewayError::NotFound(format!("no task {task}")));
        };
        if snapshot.status != TaskStatus::Open {
            return Err(GatewayError::Conflict(
                "an executor is already assigned".to_owned(),
            ));
        }
        let Some(chosen) = snapshot
            .applicants
            .iter()
            .find(|a| a.application_id == application)
            .cloned()
        else {
            return Err(GatewayError::NotFound(format!(
                "no application {application} on task {task}"
            )));
        };
        snapshot.status = TaskStatus::ReadyForWork;
        snapshot.executor = Some(ExecutorProfile {
            username: chosen.username.clone(),
            city: chosen.city.clone(),
            experience: chosen.experience,
            description: chosen.description.clone(),
            skills: chosen.skills.clone(),
        });
        // Applicants are an OPEN-only view; approval hides them and rejects
        // every other bid.
        snapshot.applicants.clear();
        for row in &mut state.my_applications {
            if row.task_id == task {
                row.status = if row.application_id == application {
                    ApplicationStatus::Accepted
                } else {
                    ApplicationStatus::Rejected
                };
            }
        }
        Ok(())
    }

    async fn start_work(&self, task: TaskId) -> GatewayResult<()> {
        let mut state = self.write()?;
        state.calls.start_work += 1;
        let Some(snapshot) = state.tasks.get_mut(&task.into_inner()) else {
            return Err(GatewayError::from_status(404, format!("no task {task}")));
        };
        if snapshot.status != TaskStatus::ReadyForWork {
            return Err(GatewayError::from_status(
                409,
                "task is not ready for work".to_owned(),
            ));
        }
        snapshot.status = TaskStatus::InProgress;
        Ok(())
    }

    async fn finish_work(&self, task: TaskId) -> GatewayResult<()> {
        let mut state = self.write()?;
        state.calls.finish_work += 1;
        let Some(snapshot) = state.tasks.get_mut(&task.into_inner()) else {
            return Err(GatewayError::from_status(404, format!("no task {task}")));
        };
        if snapshot.status != TaskStatus::InProgress {
            return Err(GatewayError::from_status(
                409,
                "task is not in progress".to_owned(),
            ));
        }
        snapshot.status = TaskStatus::ReadyForAcceptance;
        Ok(())
    }

    async fn complete_task(&self, task: TaskId) -> GatewayResult<()> {
        let mut state = self.write()?;
        state.calls.complete += 1;
        let Some(snapshot) = state.tasks.get_mut(&task.into_inner()) else {
            return Err(GatewayError::from_status(404, format!("no task {task}")));
        };
        if snapshot.status != TaskStatus::ReadyForAcceptance {
            return Err(GatewayError::from_status(
                409,
                "task is not awaiting acceptance".to_owned(),
            ));
        }
        snapshot.status = TaskStatus::Done;
        Ok(())
    }
}
