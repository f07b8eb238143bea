//! Step definitions for task view gating BDD scenarios.

mod then;
mod when;
pub mod world;
