//! Adapter implementations of the marketplace API port.

pub mod http;
pub mod memory;
