//! Mock implementations for testing
//!
//! Each mock uses a distinct external tag so several can share a registry.

mod bare;
mod failing_digest;
mod fixed_digest;
mod fixed_random;
mod misreporting_digest;

pub use bare::{BARE_IMPL_TAG, BareImpl};
pub use failing_digest::{FAILING_DIGEST_TAG, FailingDigest};
pub use fixed_digest::{FIXED_DIGEST_TAG, FixedDigest};
pub use fixed_random::{FIXED_RANDOM_TAG, FixedRandom};
pub use misreporting_digest::{MISREPORTING_DIGEST_TAG, MisreportingDigest};
