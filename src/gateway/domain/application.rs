//! Application (bid) shapes returned by the marketplace API.

use super::{ApplicationId, ApplicationStatus, ProfileId, Skill, TaskId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An executor's bid on a task, as seen by the task author.
///
/// Created when an executor applies to an `OPEN` task; mutated to accepted
/// or rejected by the approval action; immutable afterwards from the
/// client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Server-issued application id.
    pub application_id: ApplicationId,
    /// Profile of the bidding executor.
    #[serde(default)]
    pub profile_id: Option<ProfileId>,
    /// Bidder display name.
    #[serde(default)]
    pub username: Option<String>,
    /// Bidder city.
    #[serde(default)]
    pub city: Option<String>,
    /// Bidder experience in years.
    #[serde(default)]
    pub experience: Option<u32>,
    /// Free-text pitch.
    #[serde(default)]
    pub description: Option<String>,
    /// Bidder skills, in server order.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Proposed price as free text ("100", "50 BYN", "negotiable").
    #[serde(default)]
    pub price: Option<String>,
    /// Decision state of this bid.
    #[serde(default)]
    pub status: ApplicationStatus,
    /// Submission time; the server emits naive local datetimes.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Executor profile attached to a task once it leaves `OPEN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorProfile {
    /// Display name.
    #[serde(default)]
    pub username: Option<String>,
    /// Executor city.
    #[serde(default)]
    pub city: Option<String>,
    /// Experience in years.
    #[serde(default)]
    pub experience: Option<u32>,
    /// Free-text profile description.
    #[serde(default)]
    pub description: Option<String>,
    /// Executor skills, in server order.
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Row of `GET /api/my/applications`: one of the caller's own bids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyApplicationRow {
    /// Server-issued application id.
    pub application_id: ApplicationId,
    /// Task the bid was placed on.
    pub task_id: TaskId,
    /// Task title, when the server includes it.
    #[serde(default)]
    pub task_title: Option<String>,
    /// Task city, when the server includes it.
    #[serde(default)]
    pub task_city: Option<String>,
    /// Decision state of the bid.
    #[serde(default)]
    pub status: ApplicationStatus,
    /// Submission time.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Row of `GET /api/my/tasks/applications-count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCount {
    /// Task owned by the caller.
    pub task_id: TaskId,
    /// Number of pending applications on it.
    pub count: u64,
}
