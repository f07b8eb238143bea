//! Bearer credential handling for the TaskBid client.
//!
//! A single active credential exists per process. The token is an opaque
//! bearer string issued by the server; the only structure this crate reads
//! out of it is the `role` claim in the payload segment, and that claim is a
//! UI hint, never an authorisation grant. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
