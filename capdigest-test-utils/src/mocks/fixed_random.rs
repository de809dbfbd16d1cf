//! Deterministic random source

use capdigest_core::capability::{Api, Impl, RandomOps};
use capdigest_core::{ApiTag, ImplTag, Result};

/// Tag of [`FixedRandom`]
pub const FIXED_RANDOM_TAG: ImplTag = ImplTag::external(3);

/// Random implementation filling every byte with one value
///
/// Exposes 'random' only, so it stands in for an implementation of an
/// unrelated capability.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom {
    byte: u8,
}

impl FixedRandom {
    /// Fill with `byte`
    pub fn new(byte: u8) -> Self {
        Self { byte }
    }
}

impl Default for FixedRandom {
    fn default() -> Self {
        Self::new(0xAB)
    }
}

impl RandomOps for FixedRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        dest.fill(self.byte);
        Ok(())
    }
}

impl Impl for FixedRandom {
    fn impl_tag(&self) -> ImplTag {
        FIXED_RANDOM_TAG
    }

    fn find_api(&self, api_tag: ApiTag) -> Option<Api<'_>> {
        match api_tag {
            ApiTag::Random => Some(Api::Random(self)),
            _ => None,
        }
    }
}
