//! Digest that ignores its input

use capdigest_core::capability::{Api, HashInfoOps, HashOps, Impl};
use capdigest_core::{ApiTag, Buffer, ImplTag, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Tag of [`FixedDigest::deadbeef`]
pub const FIXED_DIGEST_TAG: ImplTag = ImplTag::external(1);

/// Hash implementation returning the same digest for any input
///
/// Verifies dispatch plumbing without depending on real hash math.
///
/// # Examples
///
/// ```rust
/// use capdigest_core::{Buffer, capability::hash};
/// use capdigest_test_utils::FixedDigest;
///
/// let fixed = FixedDigest::deadbeef();
/// let hash_api = hash::api(&fixed).unwrap();
/// let mut digest = Buffer::with_capacity(4);
/// hash::compute(&hash_api, b"abc", &mut digest).unwrap();
///
/// assert_eq!(digest.as_slice(), &[0xDE, 0xAD, 0xBE, 0xEF]);
/// ```
#[derive(Debug)]
pub struct FixedDigest {
    tag: ImplTag,
    digest: Vec<u8>,
    calls: AtomicUsize,
}

impl FixedDigest {
    /// Create a fixed digest under `tag`
    pub fn new(tag: ImplTag, digest: &[u8]) -> Self {
        Self {
            tag,
            digest: digest.to_vec(),
            calls: AtomicUsize::new(0),
        }
    }

    /// The 4-byte `DE AD BE EF` digest under [`FIXED_DIGEST_TAG`]
    pub fn deadbeef() -> Self {
        Self::new(FIXED_DIGEST_TAG, &[0xDE, 0xAD, 0xBE, 0xEF])
    }

    /// Number of hash operations performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl HashInfoOps for FixedDigest {
    fn digest_len(&self) -> usize {
        self.digest.len()
    }

    fn block_len(&self) -> usize {
        1
    }
}

impl HashOps for FixedDigest {
    fn hash(&self, _data: &[u8], digest: &mut Buffer) -> Result<()> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        digest.write(&self.digest);
        Ok(())
    }
}

impl Impl for FixedDigest {
    fn impl_tag(&self) -> ImplTag {
        self.tag
    }

    fn find_api(&self, api_tag: ApiTag) -> Option<Api<'_>> {
        match api_tag {
            ApiTag::Hash => Some(Api::Hash(self)),
            ApiTag::HashInfo => Some(Api::HashInfo(self)),
            _ => None,
        }
    }
}
