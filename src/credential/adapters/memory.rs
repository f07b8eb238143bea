//! In-memory token store for tests and ephemeral sessions.

use crate::credential::ports::{TokenStore, TokenStoreError, TokenStoreResult};
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory token store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    slot: Arc<RwLock<Option<String>>>,
}

impl InMemoryTokenStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn save(&self, token: &str) -> TokenStoreResult<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|err| TokenStoreError::persistence(std::io::Error::other(err.to_string())))?;
        *slot = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> TokenStoreResult<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|err| TokenStoreError::persistence(std::io::Error::other(err.to_string())))?;
        *slot = None;
        Ok(())
    }

    fn load(&self) -> TokenStoreResult<Option<String>> {
        let slot = self
            .slot
            .read()
            .map_err(|err| TokenStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(slot.clone())
    }
}
