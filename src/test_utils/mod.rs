//! Shared helpers for unit tests: canned-response mock services bound to
//! ephemeral ports.

pub mod mock;

pub use mock::*;
