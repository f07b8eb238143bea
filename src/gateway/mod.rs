//! Typed gateway to the TaskBid marketplace API.
//!
//! The gateway exposes one async operation per server endpoint and maps
//! non-success HTTP responses into the crate's failure taxonomy. Two
//! operations (`apply_to_task`, `approve_application`) distinguish specific
//! status codes so callers can branch without parsing text; everything else
//! collapses to a generic server failure carrying the response body. The
//! module follows hexagonal architecture:
//!
//! - Wire model in [`domain`]
//! - Port contract in [`ports`]
//! - HTTP and in-memory adapters in [`adapters`]

pub mod adapters;
pub mod domain;
mod error;
pub mod ports;

pub use error::{GatewayError, GatewayResult};

#[cfg(test)]
mod tests;
