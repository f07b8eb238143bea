//! Render plan derived by the projection.

use crate::gateway::domain::TaskStatus;

/// What the current caller may see and do on a task view.
///
/// All fields are independent outputs, not a single exclusive state: a
/// task author with an `OPEN` task gets both `can_delete` and
/// `show_applicants`, for example. An allowed action is a rendering hint
/// only; the server still rejects actions whose preconditions do not
/// actually hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderPlan {
    /// The author may delete the task (only while `OPEN`).
    pub can_delete: bool,
    /// An executor who is not the author may bid on the `OPEN` task.
    pub can_apply: bool,
    /// The author sees the applicant list (only while `OPEN`).
    pub show_applicants: bool,
    /// The author sees the assigned executor (once not `OPEN`).
    pub show_assigned_executor: bool,
    /// The caller is the accepted executor for this task.
    pub is_accepted_executor: bool,
    /// The accepted executor may start work (`READY_FOR_WORK` only).
    pub can_start_work: bool,
    /// The accepted executor may finish work (`IN_PROGRESS` only).
    pub can_finish_work: bool,
    /// The author may accept finished work (`READY_FOR_ACCEPTANCE` only).
    pub can_complete_task: bool,
    /// The next status on the happy path, if the task is not terminal.
    pub next_expected_status: Option<TaskStatus>,
}

impl RenderPlan {
    /// Returns whether the plan grants any action at all.
    #[must_use]
    pub const fn grants_any_action(self) -> bool {
        self.can_delete
            || self.can_apply
            || self.can_start_work
            || self.can_finish_work
            || self.can_complete_task
    }
}
