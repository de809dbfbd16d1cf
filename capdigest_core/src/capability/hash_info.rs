//! Interface 'hash_info': size metadata of a digest algorithm
//!
//! Callers size their output [`Buffer`](crate::buffer::Buffer) from
//! [`digest_len`] before invoking a hash operation.

use super::{Api, ApiTable, Capability, Impl};
use crate::tag::{ApiTag, ImplTag};

/// Operations of the 'hash_info' interface
pub trait HashInfoOps: Send + Sync {
    /// Length of the digest in bytes
    fn digest_len(&self) -> usize;

    /// Length of the internal block in bytes
    ///
    /// Algorithms without block structure report 1.
    fn block_len(&self) -> usize;
}

/// Marker for the 'hash_info' capability
#[derive(Debug, Clone, Copy)]
pub struct HashInfo;

impl Capability for HashInfo {
    const API_TAG: ApiTag = ApiTag::HashInfo;
    type Ops = dyn HashInfoOps;

    fn ops<'a>(api: Api<'a>) -> Option<&'a Self::Ops> {
        match api {
            Api::HashInfo(ops) => Some(ops),
            _ => None,
        }
    }
}

/// Operation table of the 'hash_info' interface
pub type HashInfoApi<'a> = ApiTable<'a, HashInfo>;

/// Check if given object implements interface 'hash_info'
pub fn is_implemented<H: Impl + ?Sized>(handle: &H) -> bool {
    super::is_implemented::<HashInfo, H>(handle)
}

/// Return hash info API, or `None` if it is not implemented
pub fn api<H: Impl + ?Sized>(handle: &H) -> Option<HashInfoApi<'_>> {
    super::find::<HashInfo, H>(handle)
}

/// Returns interface unique identifier
pub fn api_tag(hash_info_api: &HashInfoApi<'_>) -> ApiTag {
    hash_info_api.api_tag()
}

/// Returns implementation unique identifier
pub fn impl_tag(hash_info_api: &HashInfoApi<'_>) -> ImplTag {
    hash_info_api.impl_tag()
}

/// Length of the digest in bytes
pub fn digest_len(hash_info_api: &HashInfoApi<'_>) -> usize {
    hash_info_api.ops().digest_len()
}

/// Length of the internal block in bytes
pub fn block_len(hash_info_api: &HashInfoApi<'_>) -> usize {
    hash_info_api.ops().block_len()
}
