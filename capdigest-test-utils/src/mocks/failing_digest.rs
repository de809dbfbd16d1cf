//! Digest whose backend always fails

use capdigest_core::capability::{Api, HashInfoOps, HashOps, Impl};
use capdigest_core::error::InternalError;
use capdigest_core::{ApiTag, Buffer, ImplTag, Result};

/// Tag of [`FailingDigest`]
pub const FAILING_DIGEST_TAG: ImplTag = ImplTag::external(2);

/// Hash implementation reporting an algorithm failure on every call
#[derive(Debug, Clone)]
pub struct FailingDigest {
    message: String,
}

impl FailingDigest {
    /// Fail with `message`
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Default for FailingDigest {
    fn default() -> Self {
        Self::new("backend unavailable")
    }
}

impl HashInfoOps for FailingDigest {
    fn digest_len(&self) -> usize {
        32
    }

    fn block_len(&self) -> usize {
        64
    }
}

impl HashOps for FailingDigest {
    fn hash(&self, _data: &[u8], _digest: &mut Buffer) -> Result<()> {
        Err(InternalError::algorithm_failure("failing_digest", self.message.clone()).into())
    }
}

impl Impl for FailingDigest {
    fn impl_tag(&self) -> ImplTag {
        FAILING_DIGEST_TAG
    }

    fn find_api(&self, api_tag: ApiTag) -> Option<Api<'_>> {
        match api_tag {
            ApiTag::Hash => Some(Api::Hash(self)),
            ApiTag::HashInfo => Some(Api::HashInfo(self)),
            _ => None,
        }
    }
}
