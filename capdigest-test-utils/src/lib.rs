//! Test utilities for capdigest
//!
//! This crate provides mock implementations, test data builders and a
//! logging initializer for testing capability dispatch.

pub mod builders;
pub mod logging;
pub mod mocks;

// Re-export commonly used types
pub use builders::TestDataBuilder;
pub use logging::init_test_logging;
pub use mocks::{BareImpl, FailingDigest, FixedDigest, FixedRandom, MisreportingDigest};
