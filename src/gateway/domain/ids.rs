//! Identifier newtypes for server-issued ids.
//!
//! The server hands out numeric ids; the newtypes keep task, application,
//! profile, and skill ids from being mixed up in call signatures.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a server-issued id value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the wrapped id value.
            #[must_use]
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Unique identifier of a task.
    TaskId
);

numeric_id!(
    /// Unique identifier of an application (a bid on a task).
    ApplicationId
);

numeric_id!(
    /// Unique identifier of a user profile.
    ProfileId
);

numeric_id!(
    /// Unique identifier of a skill.
    SkillId
);
