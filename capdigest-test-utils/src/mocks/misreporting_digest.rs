//! Digest whose output length disagrees with its declared length

use capdigest_core::capability::{Api, HashInfoOps, HashOps, Impl};
use capdigest_core::{ApiTag, Buffer, ImplTag, Result};

/// Tag of [`MisreportingDigest`]
pub const MISREPORTING_DIGEST_TAG: ImplTag = ImplTag::external(5);

/// Hash implementation declaring one digest length and writing another
#[derive(Debug, Clone, Copy)]
pub struct MisreportingDigest {
    declared: usize,
    written: usize,
}

impl MisreportingDigest {
    /// Declare `declared` bytes, write `written` bytes of `0x11`
    pub fn new(declared: usize, written: usize) -> Self {
        Self { declared, written }
    }

    /// Declares 4 bytes, writes 3
    pub fn short() -> Self {
        Self::new(4, 3)
    }

    /// Declares 4 bytes, writes 5
    pub fn long() -> Self {
        Self::new(4, 5)
    }
}

impl HashInfoOps for MisreportingDigest {
    fn digest_len(&self) -> usize {
        self.declared
    }

    fn block_len(&self) -> usize {
        4
    }
}

impl HashOps for MisreportingDigest {
    fn hash(&self, _data: &[u8], digest: &mut Buffer) -> Result<()> {
        digest.write(&vec![0x11; self.written]);
        Ok(())
    }
}

impl Impl for MisreportingDigest {
    fn impl_tag(&self) -> ImplTag {
        MISREPORTING_DIGEST_TAG
    }

    fn find_api(&self, api_tag: ApiTag) -> Option<Api<'_>> {
        match api_tag {
            ApiTag::Hash => Some(Api::Hash(self)),
            ApiTag::HashInfo => Some(Api::HashInfo(self)),
            _ => None,
        }
    }
}
