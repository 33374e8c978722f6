//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//! - Keeping records in a `Vec` preserves insertion order, which the
//!   listing behavior of the services depends on
//!
//! Router-level tests with axum-test live in `integration_tests` and run
//! against the real JSON store repositories over a temporary directory.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
