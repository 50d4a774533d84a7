//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks instead of mockall: the port traits take `&str` arguments and
//! the notification mock has to be observable from a spawned task.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
