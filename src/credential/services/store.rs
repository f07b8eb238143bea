//! Process-wide credential store service.

use crate::credential::domain::{Role, role_from_token};
use crate::credential::ports::{TokenStore, TokenStoreError};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Result type for credential store operations.
pub type CredentialResult<T> = Result<T, CredentialError>;

/// Errors returned by the credential store service.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    /// Persistence through the token store port failed.
    #[error(transparent)]
    Store(#[from] TokenStoreError),
}

/// Holds the single active bearer credential.
///
/// Reads go through an in-process cache; writes update the cache and the
/// durable [`TokenStore`] together. Credential changes only happen through
/// explicit, serialised user actions (login, register, logout), so no
/// concurrent-write scenario exists in practice.
pub struct CredentialStore<S: TokenStore> {
    store: Arc<S>,
    cached: RwLock<Option<String>>,
}

impl<S: TokenStore> CredentialStore<S> {
    /// Creates a credential store, loading any persisted token.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Store`] when the persisted token cannot be
    /// read.
    pub fn open(store: Arc<S>) -> CredentialResult<Self> {
        let cached = store.load()?;
        Ok(Self {
            store,
            cached: RwLock::new(cached),
        })
    }

    /// Stores a new bearer token, persisting it durably.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Store`] when persistence fails; the cache
    /// is left unchanged in that case.
    pub fn set(&self, token: &str) -> CredentialResult<()> {
        self.store.save(token)?;
        if let Ok(mut cached) = self.cached.write() {
            *cached = Some(token.to_owned());
        }
        Ok(())
    }

    /// Clears the active credential and erases persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Store`] when the erase fails.
    pub fn clear(&self) -> CredentialResult<()> {
        self.store.clear()?;
        if let Ok(mut cached) = self.cached.write() {
            *cached = None;
        }
        Ok(())
    }

    /// Returns the active bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.cached.read().ok().and_then(|cached| cached.clone())
    }

    /// Derives the caller role hint from the active token.
    ///
    /// Returns `None` when no token is stored or when its payload cannot be
    /// decoded. Never fails.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.token().as_deref().and_then(role_from_token)
    }
}
