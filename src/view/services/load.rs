//! Generation-tagged load cancellation.
//!
//! A page transition before a prior fetch completes must discard that
//! fetch's result: a late-arriving response may not overwrite a newer view
//! state. Each load is tagged with the generation current at its start;
//! when the view unmounts or its identifying parameter changes, the
//! service bumps the generation and every in-flight load becomes stale.

use super::TaskView;

/// Tag identifying one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTag {
    pub(super) generation: u64,
}

/// Result of a tagged load.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The load finished while its tag was still current.
    Loaded(TaskView),
    /// A newer load started first; the result was discarded.
    Superseded,
}

impl LoadOutcome {
    /// Returns the loaded view, if the load was still current.
    #[must_use]
    pub fn into_view(self) -> Option<TaskView> {
        match self {
            Self::Loaded(view) => Some(view),
            Self::Superseded => None,
        }
    }
}
