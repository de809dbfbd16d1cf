//! Operating system entropy source

use crate::Result;
use crate::capability::{Api, Impl, RandomOps};
use crate::error::InternalError;
use crate::tag::{ApiTag, ImplTag};
use rand::TryRngCore;
use rand::rngs::OsRng;

/// Random bytes from the operating system
///
/// Exposes 'random' only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomOps for SystemRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|err| InternalError::random_source("system_random", err.to_string()).into())
    }
}

impl Impl for SystemRandom {
    fn impl_tag(&self) -> ImplTag {
        ImplTag::SystemRandom
    }

    fn find_api(&self, api_tag: ApiTag) -> Option<Api<'_>> {
        match api_tag {
            ApiTag::Random => Some(Api::Random(self)),
            _ => None,
        }
    }
}
