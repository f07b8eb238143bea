//! Port contracts for credential persistence.

mod store;

pub use store::{TokenStore, TokenStoreError, TokenStoreResult};
