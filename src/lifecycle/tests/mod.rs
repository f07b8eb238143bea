//! Unit tests for the lifecycle projection.
