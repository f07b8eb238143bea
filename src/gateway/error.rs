//! Failure taxonomy for marketplace API operations.

use crate::credential::services::CredentialError;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors returned by marketplace gateway implementations.
///
/// Most operations collapse every non-success response into
/// [`GatewayError::Server`] carrying the response body text; only
/// `apply_to_task` and `approve_application` distinguish status codes into
/// named kinds so callers can branch without parsing text.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The transport could not reach the server or complete the exchange.
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The server rejected the credential (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The caller lacks permission for the operation (403).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The addressed resource does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The caller already has an application on this task (apply 409).
    ///
    /// Callers treat this as success-equivalent: either way the caller
    /// ends up with an application on the task.
    #[error("already applied to this task")]
    AlreadyApplied,

    /// The operation conflicts with the server's current state (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other non-success response, carrying the server's body text.
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        message: String,
    },

    /// Persisting the credential returned by login failed client-side.
    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl GatewayError {
    /// Wraps a transport-layer error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Classifies a non-success response using the default policy.
    ///
    /// Everything collapses to [`GatewayError::Server`] with the body text.
    #[must_use]
    pub const fn from_status(status: u16, message: String) -> Self {
        Self::Server { status, message }
    }

    /// Classifies a non-success response to `POST /tasks/{id}/apply`.
    #[must_use]
    pub fn from_apply_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::Unauthorized(message),
            409 => Self::AlreadyApplied,
            _ => Self::Server { status, message },
        }
    }

    /// Classifies a non-success response to the approve endpoint.
    #[must_use]
    pub fn from_approve_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            _ => Self::Server { status, message },
        }
    }
}
