//! Task shapes returned by the marketplace API.

use super::{Application, ExecutorProfile, Skill, TaskId, TaskStatus};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Full task snapshot from `GET /api/task?id=`.
///
/// `applicants` is populated only when the caller is the author and the
/// task is still `OPEN`; `executor` only once the task has left `OPEN`. The
/// two are mutually exclusive in well-formed responses, but both are
/// tolerated on decode since that exclusivity is observed behaviour rather
/// than a documented server invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSnapshot {
    /// Server-issued task id.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// City the task is located in.
    #[serde(default)]
    pub city: Option<String>,
    /// Current lifecycle position.
    pub status: TaskStatus,
    /// Skills the author asked for.
    #[serde(default)]
    pub required_skills: Vec<Skill>,
    /// Creation time; the server emits naive local datetimes with
    /// fractional seconds.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Bids on this task (author view, `OPEN` only).
    #[serde(default)]
    pub applicants: Vec<Application>,
    /// Assigned executor (once not `OPEN`).
    #[serde(default)]
    pub executor: Option<ExecutorProfile>,
}

impl TaskSnapshot {
    /// Returns the current lifecycle position.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}

/// Task row in list responses (`/api/my`, `/api/tasks/all`,
/// `/api/recommendations`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    /// Server-issued task id.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Current lifecycle position.
    pub status: TaskStatus,
    /// City the task is located in.
    #[serde(default)]
    pub city: Option<String>,
    /// Planned start date shown in list rows.
    #[serde(default)]
    pub begin_date: Option<NaiveDate>,
}
