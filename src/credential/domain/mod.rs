//! Domain model for credential handling.
//!
//! The domain covers the caller role enum and the pure, total decode of the
//! role claim from a bearer token. Nothing here touches storage or the
//! network.

mod claims;
mod role;

pub use claims::role_from_token;
pub use role::{ParseRoleError, Role};
