//! Interface 'hash': stateless single-shot message digest
//!
//! ```
//! use capdigest_core::{AlgorithmRegistry, Buffer, ImplTag, capability::{hash, hash_info}};
//!
//! let sha256 = AlgorithmRegistry::global().get(ImplTag::Sha256).unwrap();
//! let hash_api = hash::api(sha256.as_ref()).unwrap();
//!
//! let digest_len = hash_info::digest_len(&hash::hash_info_api(&hash_api));
//! let mut digest = Buffer::with_capacity(digest_len);
//! hash::compute(&hash_api, b"abc", &mut digest).unwrap();
//!
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

use super::hash_info::{HashInfoApi, HashInfoOps};
use super::{Api, ApiTable, Capability, Impl};
use crate::buffer::Buffer;
use crate::tag::{ApiTag, ImplTag};
use crate::{Result, error::ValidationError};

/// Operations of the 'hash' interface
///
/// Every hash implementation also describes its sizes through 'hash_info'.
pub trait HashOps: HashInfoOps {
    /// Calculate hash over given data, appending exactly `digest_len()`
    /// bytes to `digest`
    ///
    /// The caller guarantees `digest` has at least `digest_len()` unused
    /// bytes. Failures of the underlying algorithm are reported unchanged.
    fn hash(&self, data: &[u8], digest: &mut Buffer) -> Result<()>;
}

/// Marker for the 'hash' capability
#[derive(Debug, Clone, Copy)]
pub struct Hash;

impl Capability for Hash {
    const API_TAG: ApiTag = ApiTag::Hash;
    type Ops = dyn HashOps;

    fn ops<'a>(api: Api<'a>) -> Option<&'a Self::Ops> {
        match api {
            Api::Hash(ops) => Some(ops),
            _ => None,
        }
    }
}

/// Operation table of the 'hash' interface
pub type HashApi<'a> = ApiTable<'a, Hash>;

/// Check if given object implements interface 'hash'
pub fn is_implemented<H: Impl + ?Sized>(handle: &H) -> bool {
    super::is_implemented::<Hash, H>(handle)
}

/// Return hash API, or `None` if it is not implemented
pub fn api<H: Impl + ?Sized>(handle: &H) -> Option<HashApi<'_>> {
    super::find::<Hash, H>(handle)
}

/// Return hash info API of the same implementation
pub fn hash_info_api<'a>(hash_api: &HashApi<'a>) -> HashInfoApi<'a> {
    let ops: &'a (dyn HashInfoOps + 'static) = hash_api.ops();
    HashInfoApi::new(hash_api.impl_tag(), ops)
}

/// Returns interface unique identifier
pub fn api_tag(hash_api: &HashApi<'_>) -> ApiTag {
    hash_api.api_tag()
}

/// Returns implementation unique identifier
pub fn impl_tag(hash_api: &HashApi<'_>) -> ImplTag {
    hash_api.impl_tag()
}

/// Calculate hash over given data
///
/// # Panics
///
/// Panics if `digest` has fewer unused bytes than the algorithm's digest
/// length. Size the buffer from [`hash_info_api`] first, or use
/// [`try_compute`] to get an error instead.
///
/// # Errors
///
/// Returns whatever error the concrete implementation reports.
pub fn compute(hash_api: &HashApi<'_>, data: &[u8], digest: &mut Buffer) -> Result<()> {
    let required = hash_api.ops().digest_len();
    assert!(
        digest.unused_len() >= required,
        "contract violation: {} digest needs {} bytes, output buffer has {} unused",
        hash_api.impl_tag(),
        required,
        digest.unused_len()
    );

    log::trace!("hashing {} bytes with {}", data.len(), hash_api.impl_tag());
    hash_api.ops().hash(data, digest)
}

/// Calculate hash over given data, reporting an undersized `digest` as
/// [`ValidationError::InsufficientCapacity`] instead of panicking
pub fn try_compute(hash_api: &HashApi<'_>, data: &[u8], digest: &mut Buffer) -> Result<()> {
    let required = hash_api.ops().digest_len();
    if digest.unused_len() < required {
        return Err(ValidationError::insufficient_capacity(required, digest.unused_len()).into());
    }

    hash_api.ops().hash(data, digest)
}

/// Calculate hash over given data into a freshly sized vector
pub fn compute_vec(hash_api: &HashApi<'_>, data: &[u8]) -> Result<Vec<u8>> {
    let mut digest = Buffer::with_capacity(hash_api.ops().digest_len());
    compute(hash_api, data, &mut digest)?;
    Ok(digest.into_vec())
}
