//! Ephemeral navigation context carried into a task view.

use crate::gateway::domain::ApplicationStatus;

/// How the caller arrived at the task view.
///
/// Client-local and ephemeral: carried across a page transition, never
/// persisted, and never authoritative: a buggy or malicious caller could
/// fabricate it, so the server re-validates every mutating action
/// regardless of what this context claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationContext {
    is_author: bool,
    from_my_applications: bool,
    my_application_status: Option<ApplicationStatus>,
}

impl NavigationContext {
    /// Context for the task author arriving from their own task list.
    #[must_use]
    pub const fn author() -> Self {
        Self {
            is_author: true,
            from_my_applications: false,
            my_application_status: None,
        }
    }

    /// Context for a caller browsing someone else's task.
    #[must_use]
    pub const fn visitor() -> Self {
        Self {
            is_author: false,
            from_my_applications: false,
            my_application_status: None,
        }
    }

    /// Context for an executor arriving from their own applications list,
    /// carrying the status of their bid on this task.
    #[must_use]
    pub const fn from_my_applications(status: ApplicationStatus) -> Self {
        Self {
            is_author: false,
            from_my_applications: true,
            my_application_status: Some(status),
        }
    }

    /// Whether the caller claims to be the task author.
    #[must_use]
    pub const fn is_author(self) -> bool {
        self.is_author
    }

    /// Whether the caller arrived from their applications list.
    #[must_use]
    pub const fn arrived_from_my_applications(self) -> bool {
        self.from_my_applications
    }

    /// Status of the caller's bid on this task, when known.
    #[must_use]
    pub const fn my_application_status(self) -> Option<ApplicationStatus> {
        self.my_application_status
    }
}
