//! Interface 'hash_stream': incremental message digest
//!
//! Separate from 'hash' so that the single-shot interface stays stateless.
//! A context produced by [`start`] accumulates chunks and yields the same
//! digest the single-shot call would produce over their concatenation.

use super::hash_info::{HashInfoApi, HashInfoOps};
use super::{Api, ApiTable, Capability, Impl};
use crate::Result;
use crate::buffer::Buffer;
use crate::tag::{ApiTag, ImplTag};

/// Running digest computation
pub trait HashContext: Send {
    /// Add `data` to the computation
    fn update(&mut self, data: &[u8]);

    /// Finish the computation, appending the digest to `digest`
    ///
    /// # Panics
    ///
    /// Panics if `digest` cannot hold the digest.
    fn finish(self: Box<Self>, digest: &mut Buffer) -> Result<()>;
}

/// Operations of the 'hash_stream' interface
pub trait HashStreamOps: HashInfoOps {
    /// Create a new running computation
    fn start(&self) -> Box<dyn HashContext>;
}

/// Marker for the 'hash_stream' capability
#[derive(Debug, Clone, Copy)]
pub struct HashStream;

impl Capability for HashStream {
    const API_TAG: ApiTag = ApiTag::HashStream;
    type Ops = dyn HashStreamOps;

    fn ops<'a>(api: Api<'a>) -> Option<&'a Self::Ops> {
        match api {
            Api::HashStream(ops) => Some(ops),
            _ => None,
        }
    }
}

/// Operation table of the 'hash_stream' interface
pub type HashStreamApi<'a> = ApiTable<'a, HashStream>;

/// Check if given object implements interface 'hash_stream'
pub fn is_implemented<H: Impl + ?Sized>(handle: &H) -> bool {
    super::is_implemented::<HashStream, H>(handle)
}

/// Return hash stream API, or `None` if it is not implemented
pub fn api<H: Impl + ?Sized>(handle: &H) -> Option<HashStreamApi<'_>> {
    super::find::<HashStream, H>(handle)
}

/// Return hash info API of the same implementation
pub fn hash_info_api<'a>(hash_stream_api: &HashStreamApi<'a>) -> HashInfoApi<'a> {
    let ops: &'a (dyn HashInfoOps + 'static) = hash_stream_api.ops();
    HashInfoApi::new(hash_stream_api.impl_tag(), ops)
}

/// Returns interface unique identifier
pub fn api_tag(hash_stream_api: &HashStreamApi<'_>) -> ApiTag {
    hash_stream_api.api_tag()
}

/// Returns implementation unique identifier
pub fn impl_tag(hash_stream_api: &HashStreamApi<'_>) -> ImplTag {
    hash_stream_api.impl_tag()
}

/// Start a new running computation
pub fn start(hash_stream_api: &HashStreamApi<'_>) -> Box<dyn HashContext> {
    hash_stream_api.ops().start()
}

/// Feed every chunk through a fresh context and append the digest
///
/// # Panics
///
/// Panics if `digest` has fewer unused bytes than the digest length.
pub fn digest_chunks<'c, I>(
    hash_stream_api: &HashStreamApi<'_>,
    chunks: I,
    digest: &mut Buffer,
) -> Result<()>
where
    I: IntoIterator<Item = &'c [u8]>,
{
    let required = hash_stream_api.ops().digest_len();
    assert!(
        digest.unused_len() >= required,
        "contract violation: {} digest needs {} bytes, output buffer has {} unused",
        hash_stream_api.impl_tag(),
        required,
        digest.unused_len()
    );

    let mut context = start(hash_stream_api);
    for chunk in chunks {
        context.update(chunk);
    }
    context.finish(digest)
}
