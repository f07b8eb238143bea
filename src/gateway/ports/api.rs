//! Async contract covering the marketplace API surface.

use crate::gateway::GatewayResult;
use crate::gateway::domain::{
    ApplicationCount, ApplicationId, CreateTaskRequest, LoginRequest, LoginResponse,
    MyApplicationRow, OnboardingRequest, PriceQuote, RegisterRequest, SkillCategory, TaskId,
    TaskSnapshot, TaskSummary,
};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Typed request/response surface of the marketplace server.
///
/// One method per server operation. Anonymous calls are only valid for
/// [`register`](Self::register) and [`login`](Self::login); every other
/// operation requires a stored bearer credential.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on transport
    /// failure or a non-success response.
    async fn register(&self, request: &RegisterRequest) -> GatewayResult<()>;

    /// Exchanges credentials for a bearer token.
    ///
    /// Persisting the returned token is a side effect of this operation:
    /// after a successful login the credential store holds the new token.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on transport
    /// failure, a non-success response, or a token persistence failure.
    async fn login(&self, request: &LoginRequest) -> GatewayResult<LoginResponse>;

    /// Fetches the skill reference data for forms.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on failure.
    async fn fetch_skill_categories(&self) -> GatewayResult<Vec<SkillCategory>>;

    /// Submits the onboarding payload for the chosen role.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on failure.
    async fn submit_onboarding(&self, request: &OnboardingRequest) -> GatewayResult<()>;

    /// Creates a new task owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on failure.
    async fn create_task(&self, request: &CreateTaskRequest) -> GatewayResult<()>;

    /// Deletes one of the caller's tasks; the server accepts this only
    /// while the task is `OPEN`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on failure.
    async fn delete_task(&self, id: TaskId) -> GatewayResult<()>;

    /// Lists the caller's own tasks.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on failure.
    async fn list_my_tasks(&self) -> GatewayResult<Vec<TaskSummary>>;

    /// Lists every browsable task.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on failure.
    async fn list_all_tasks(&self) -> GatewayResult<Vec<TaskSummary>>;

    /// Fetches a full task snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on failure.
    async fn fetch_task(&self, id: TaskId) -> GatewayResult<TaskSnapshot>;

    /// Lists tasks recommended for the caller.
    ///
    /// A 403 response yields an empty list, not an error: callers without
    /// the executor role silently see no recommendations. This relaxation
    /// applies to this endpoint only.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on any other
    /// failure.
    async fn list_recommendations(&self) -> GatewayResult<Vec<TaskSummary>>;

    /// Places a bid with the given price on an `OPEN` task.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::AlreadyApplied`](crate::gateway::GatewayError::AlreadyApplied)
    /// when the caller already has a bid on the task (409) and
    /// [`GatewayError::Unauthorized`](crate::gateway::GatewayError::Unauthorized)
    /// on 401; other failures collapse to the generic server kind.
    async fn apply_to_task(&self, id: TaskId, price: &PriceQuote) -> GatewayResult<()>;

    /// Lists the caller's own bids.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on failure.
    async fn list_my_applications(&self) -> GatewayResult<Vec<MyApplicationRow>>;

    /// Lists pending-application counts for the caller's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on failure.
    async fn list_my_task_application_counts(&self) -> GatewayResult<Vec<ApplicationCount>>;

    /// Approves one application on the caller's task.
    ///
    /// The server assigns the executor, rejects the remaining applications,
    /// and moves the task to `READY_FOR_WORK`.
    ///
    /// # Errors
    ///
    /// 401, 403, 404, and 409 map to the named
    /// [`GatewayError`](crate::gateway::GatewayError) kinds; other failures
    /// collapse to the generic server kind.
    async fn approve_application(
        &self,
        task: TaskId,
        application: ApplicationId,
    ) -> GatewayResult<()>;

    /// Starts work on a task assigned to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on failure.
    async fn start_work(&self, task: TaskId) -> GatewayResult<()>;

    /// Marks the caller's assigned work as finished.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on failure.
    async fn finish_work(&self, task: TaskId) -> GatewayResult<()>;

    /// Accepts finished work on the caller's task, completing it.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`](crate::gateway::GatewayError) on failure.
    async fn complete_task(&self, task: TaskId) -> GatewayResult<()>;
}
