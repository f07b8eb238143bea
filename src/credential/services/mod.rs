//! Orchestration services for credential handling.

mod store;

pub use store::{CredentialError, CredentialResult, CredentialStore};
