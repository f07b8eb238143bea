//! Caller role enum mirrored from the server's token claims.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two caller roles of the marketplace.
///
/// Customers post tasks; executors bid on and perform them. A role decoded
/// from a token is an unverified hint for UI gating only; the server is the
/// sole authority for every mutating operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Posts tasks and accepts applications.
    Customer,
    /// Browses tasks, bids, and performs the work.
    Executor,
}

impl Role {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Executor => "EXECUTOR",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "CUSTOMER" => Ok(Self::Customer),
            "EXECUTOR" => Ok(Self::Executor),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Error returned while parsing role claims.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
