//! Task and application status enums mirrored from the server.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Lifecycle position of a task.
///
/// The authoritative state machine lives server-side; this mirror exists
/// for gating purposes only. The happy path is `OPEN → READY_FOR_WORK →
/// IN_PROGRESS → READY_FOR_ACCEPTANCE → DONE`; an `OPEN` task may also be
/// deleted by its author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// Collecting applications; deletable by the author.
    Open,
    /// An application has been approved; work has not started.
    ReadyForWork,
    /// The assigned executor is working.
    InProgress,
    /// Work is finished and awaits the author's acceptance.
    ReadyForAcceptance,
    /// Terminal: the author accepted the work.
    Done,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::ReadyForWork => "READY_FOR_WORK",
            Self::InProgress => "IN_PROGRESS",
            Self::ReadyForAcceptance => "READY_FOR_ACCEPTANCE",
            Self::Done => "DONE",
        }
    }

    /// Returns whether the status grants no further actions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns the next status on the happy path, if any.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::Open => Some(Self::ReadyForWork),
            Self::ReadyForWork => Some(Self::InProgress),
            Self::InProgress => Some(Self::ReadyForAcceptance),
            Self::ReadyForAcceptance => Some(Self::Done),
            Self::Done => None,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "OPEN" => Ok(Self::Open),
            "READY_FOR_WORK" => Ok(Self::ReadyForWork),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "READY_FOR_ACCEPTANCE" => Ok(Self::ReadyForAcceptance),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The server has emitted both a bare string and an object with a `name`
/// field for statuses, depending on endpoint version.
#[derive(Deserialize)]
#[serde(untagged)]
enum StatusRepr {
    Name(String),
    Object { name: String },
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = match StatusRepr::deserialize(deserializer)? {
            StatusRepr::Name(name) | StatusRepr::Object { name } => name,
        };
        Self::try_from(raw.as_str()).map_err(D::Error::custom)
    }
}

/// Error returned while parsing task statuses from the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Status of an application from the bidder's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// Submitted, awaiting the author's decision.
    #[default]
    Pending,
    /// The author approved this application.
    Accepted,
    /// The author approved a different application.
    Rejected,
}

impl ApplicationStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }
}
