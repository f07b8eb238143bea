//! Task view service: load, mutate, re-fetch, re-project.

use super::{LoadOutcome, LoadTag};
use crate::credential::domain::Role;
use crate::gateway::domain::{ApplicationId, EmptyPriceError, PriceQuote, TaskId, TaskSnapshot};
use crate::gateway::ports::MarketplaceApi;
use crate::gateway::GatewayError;
use crate::lifecycle::domain::{NavigationContext, RenderPlan, project};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::debug;

/// Result type for task view operations.
pub type TaskViewResult<T> = Result<T, TaskViewError>;

/// Errors surfaced by the task view service.
#[derive(Debug, Error)]
pub enum TaskViewError {
    /// Client-side validation failed before any network call.
    #[error(transparent)]
    EmptyPrice(#[from] EmptyPriceError),
    /// A gateway operation failed; the view is unchanged.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// A loaded task view: snapshot, caller identity, and the derived plan.
#[derive(Debug, Clone)]
pub struct TaskView {
    snapshot: TaskSnapshot,
    role: Option<Role>,
    navigation: NavigationContext,
    has_applied: bool,
    plan: RenderPlan,
}

impl TaskView {
    fn new(
        snapshot: TaskSnapshot,
        role: Option<Role>,
        navigation: NavigationContext,
        has_applied: bool,
    ) -> Self {
        let plan = project(&snapshot, role, &navigation, has_applied);
        Self {
            snapshot,
            role,
            navigation,
            has_applied,
            plan,
        }
    }

    /// Returns the current task snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &TaskSnapshot {
        &self.snapshot
    }

    /// Returns the id of the viewed task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.snapshot.id
    }

    /// Returns the current render plan.
    #[must_use]
    pub const fn plan(&self) -> RenderPlan {
        self.plan
    }

    /// Returns whether the caller has applied during this view.
    #[must_use]
    pub const fn has_applied(&self) -> bool {
        self.has_applied
    }

    fn replace_snapshot(&mut self, snapshot: TaskSnapshot) {
        self.snapshot = snapshot;
        self.plan = project(&self.snapshot, self.role, &self.navigation, self.has_applied);
    }
}

/// Drives the task view protocol over a marketplace gateway.
///
/// One logical caller, one task view at a time. Mutations either re-fetch
/// the snapshot and re-project in place, or consume the view when the
/// caller navigates away afterwards (complete, delete).
pub struct TaskViewService<A: MarketplaceApi> {
    api: Arc<A>,
    generation: AtomicU64,
}

impl<A: MarketplaceApi> TaskViewService<A> {
    /// Creates a view service over the given gateway.
    #[must_use]
    pub const fn new(api: Arc<A>) -> Self {
        Self {
            api,
            generation: AtomicU64::new(0),
        }
    }

    /// Starts a new load, invalidating every earlier in-flight load.
    ///
    /// Call this when the view mounts or its task id changes.
    #[must_use]
    pub fn begin_load(&self) -> LoadTag {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTag { generation }
    }

    /// Invalidates every in-flight load without starting a new one.
    ///
    /// Call this when the view unmounts.
    pub fn leave_view(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn is_current(&self, tag: LoadTag) -> bool {
        self.generation.load(Ordering::SeqCst) == tag.generation
    }

    /// Loads a task and projects it for the given caller.
    ///
    /// When the tag is no longer current by the time the fetch completes,
    /// the result (success or failure) is discarded and
    /// [`LoadOutcome::Superseded`] is returned instead.
    ///
    /// # Errors
    ///
    /// Returns [`TaskViewError::Gateway`] when the fetch fails while the
    /// tag is still current.
    pub async fn load(
        &self,
        tag: LoadTag,
        id: TaskId,
        role: Option<Role>,
        navigation: NavigationContext,
    ) -> TaskViewResult<LoadOutcome> {
        let fetched = self.api.fetch_task(id).await;
        if !self.is_current(tag) {
            debug!(%id, "discarding superseded task load");
            return Ok(LoadOutcome::Superseded);
        }
        let snapshot = fetched?;
        Ok(LoadOutcome::Loaded(TaskView::new(
            snapshot, role, navigation, false,
        )))
    }

    async fn refresh(&self, view: &mut TaskView) -> TaskViewResult<()> {
        let snapshot = self.api.fetch_task(view.task_id()).await?;
        view.replace_snapshot(snapshot);
        Ok(())
    }

    /// Submits a bid with the given raw price input.
    ///
    /// The trimmed input must be non-empty; validation failure blocks the
    /// submission without issuing a network call. On success, and on the
    /// already-applied conflict whose end state is identical, the view
    /// remembers the bid locally, then re-fetches and re-projects.
    ///
    /// # Errors
    ///
    /// Returns [`TaskViewError::EmptyPrice`] on validation failure and
    /// [`TaskViewError::Gateway`] on any other gateway failure; the view is
    /// unchanged in both cases.
    pub async fn apply_with_price(
        &self,
        view: &mut TaskView,
        raw_price: &str,
    ) -> TaskViewResult<()> {
        let price = PriceQuote::new(raw_price)?;
        match self.api.apply_to_task(view.task_id(), &price).await {
            Ok(()) | Err(GatewayError::AlreadyApplied) => {
                view.has_applied = true;
                self.refresh(view).await
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Approves one application on the author's task, then re-fetches.
    ///
    /// The server's side effects (rejecting the other applications) are not
    /// known to the client, so the confirming re-fetch is mandatory.
    ///
    /// # Errors
    ///
    /// Returns [`TaskViewError::Gateway`] on failure; the view and its plan
    /// are untouched until a later re-fetch.
    pub async fn approve(
        &self,
        view: &mut TaskView,
        application: ApplicationId,
    ) -> TaskViewResult<()> {
        self.api
            .approve_application(view.task_id(), application)
            .await?;
        self.refresh(view).await
    }

    /// Starts work on the task, then re-fetches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskViewError::Gateway`] on failure; the view is unchanged.
    pub async fn start_work(&self, view: &mut TaskView) -> TaskViewResult<()> {
        self.api.start_work(view.task_id()).await?;
        self.refresh(view).await
    }

    /// Finishes work on the task, then re-fetches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskViewError::Gateway`] on failure; the view is unchanged.
    pub async fn finish_work(&self, view: &mut TaskView) -> TaskViewResult<()> {
        self.api.finish_work(view.task_id()).await?;
        self.refresh(view).await
    }

    /// Accepts finished work, consuming the view.
    ///
    /// The caller navigates away afterwards, so no projection derived from
    /// the pre-mutation snapshot can survive. On failure the view is
    /// returned so the caller can stay on it.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure together with the untouched view.
    pub async fn complete(&self, view: TaskView) -> Result<(), (TaskViewError, TaskView)> {
        match self.api.complete_task(view.task_id()).await {
            Ok(()) => Ok(()),
            Err(err) => Err((err.into(), view)),
        }
    }

    /// Deletes the author's task, consuming the view.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure together with the untouched view.
    pub async fn delete(&self, view: TaskView) -> Result<(), (TaskViewError, TaskView)> {
        match self.api.delete_task(view.task_id()).await {
            Ok(()) => Ok(()),
            Err(err) => Err((err.into(), view)),
        }
    }
}
