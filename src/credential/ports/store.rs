//! Storage port for the single persisted bearer token.

use std::sync::Arc;
use thiserror::Error;

/// Result type for token store operations.
pub type TokenStoreResult<T> = Result<T, TokenStoreError>;

/// Durable storage contract for the bearer credential.
///
/// The client keeps exactly one token under a fixed slot; saving replaces
/// any previous value. Implementations must be safe to share across the
/// process.
pub trait TokenStore: Send + Sync {
    /// Persists the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::Persistence`] when the backing storage
    /// rejects the write.
    fn save(&self, token: &str) -> TokenStoreResult<()>;

    /// Erases the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::Persistence`] when the backing storage
    /// rejects the erase.
    fn clear(&self) -> TokenStoreResult<()>;

    /// Loads the persisted token.
    ///
    /// Returns `None` when no token has been stored.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::Persistence`] when the backing storage
    /// cannot be read.
    fn load(&self) -> TokenStoreResult<Option<String>>;
}

/// Errors returned by token store implementations.
#[derive(Debug, Clone, Error)]
pub enum TokenStoreError {
    /// Storage-layer failure.
    #[error("token storage error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TokenStoreError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
