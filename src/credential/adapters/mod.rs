//! Adapter implementations of the credential ports.

pub mod memory;
