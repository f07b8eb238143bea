//! Orchestration services for the task view.

mod load;
mod task_view;

pub use load::{LoadOutcome, LoadTag};
pub use task_view::{TaskView, TaskViewError, TaskViewResult, TaskViewService};
