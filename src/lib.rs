//! Client-side core for the TaskBid task marketplace.
//!
//! This crate provides the rendering-free core of a marketplace client:
//! customers post tasks, executors browse, bid on, and fulfil them. The
//! server owns the authoritative task state machine; this crate projects
//! server state into render plans and issues typed requests.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//! - **Services**: Orchestration over ports and domain logic
//!
//! # Modules
//!
//! - [`credential`]: Bearer token storage and role-hint derivation
//! - [`gateway`]: Typed request/response surface of the marketplace API
//! - [`lifecycle`]: Pure projection of task state into render plans
//! - [`view`]: Load/mutate/re-fetch protocol around a task view

pub mod credential;
pub mod gateway;
pub mod lifecycle;
pub mod view;
