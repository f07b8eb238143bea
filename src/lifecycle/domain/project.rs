//! The lifecycle projection itself.

use super::{NavigationContext, RenderPlan};
use crate::credential::domain::Role;
use crate::gateway::domain::{ApplicationStatus, TaskSnapshot, TaskStatus};

/// Projects a task snapshot into a render plan for the current caller.
///
/// Pure and total over well-formed inputs: no I/O, no clock, no error
/// path. Each gate combines who the caller is relative to this task with
/// the task's lifecycle position and the ephemeral navigation context.
/// `has_applied` is the caller's local memory of a bid
/// placed during this view, set optimistically after a successful (or
/// already-applied) submission.
#[must_use]
pub fn project(
    task: &TaskSnapshot,
    role: Option<Role>,
    navigation: &NavigationContext,
    has_applied: bool,
) -> RenderPlan {
    let status = task.status();
    let is_author = navigation.is_author();
    let is_executor = role == Some(Role::Executor);

    let is_accepted_executor = is_executor
        && navigation.arrived_from_my_applications()
        && navigation.my_application_status() == Some(ApplicationStatus::Accepted);

    RenderPlan {
        can_delete: is_author && status == TaskStatus::Open,
        can_apply: !is_author && is_executor && status == TaskStatus::Open && !has_applied,
        show_applicants: is_author && status == TaskStatus::Open,
        show_assigned_executor: is_author && status != TaskStatus::Open && task.executor.is_some(),
        is_accepted_executor,
        can_start_work: is_accepted_executor && status == TaskStatus::ReadyForWork,
        can_finish_work: is_accepted_executor && status == TaskStatus::InProgress,
        can_complete_task: is_author && status == TaskStatus::ReadyForAcceptance,
        next_expected_status: status.successor(),
    }
}
