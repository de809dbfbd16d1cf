//! CRC32 checksum exposed as a 4-byte digest

use crate::Result;
use crate::buffer::Buffer;
use crate::capability::{Api, HashContext, HashInfoOps, HashOps, HashStreamOps, Impl};
use crate::tag::{ApiTag, ImplTag};
use crc32fast::Hasher as Crc32Hasher;

/// CRC-32 (IEEE), digest written big-endian
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc32Impl;

/// CRC32 streaming context
struct Crc32Context {
    hasher: Crc32Hasher,
}

impl HashContext for Crc32Context {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finish(self: Box<Self>, digest: &mut Buffer) -> Result<()> {
        digest.write(&self.hasher.finalize().to_be_bytes());
        Ok(())
    }
}

impl HashInfoOps for Crc32Impl {
    fn digest_len(&self) -> usize {
        4
    }

    fn block_len(&self) -> usize {
        1
    }
}

impl HashOps for Crc32Impl {
    fn hash(&self, data: &[u8], digest: &mut Buffer) -> Result<()> {
        digest.write(&crc32fast::hash(data).to_be_bytes());
        Ok(())
    }
}

impl HashStreamOps for Crc32Impl {
    fn start(&self) -> Box<dyn HashContext> {
        Box::new(Crc32Context {
            hasher: Crc32Hasher::new(),
        })
    }
}

impl Impl for Crc32Impl {
    fn impl_tag(&self) -> ImplTag {
        ImplTag::Crc32
    }

    fn find_api(&self, api_tag: ApiTag) -> Option<Api<'_>> {
        match api_tag {
            ApiTag::Hash => Some(Api::Hash(self)),
            ApiTag::HashInfo => Some(Api::HashInfo(self)),
            ApiTag::HashStream => Some(Api::HashStream(self)),
            ApiTag::Random => None,
        }
    }
}
