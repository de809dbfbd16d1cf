//! Interface 'random': random byte generation

use super::{Api, ApiTable, Capability, Impl};
use crate::Result;
use crate::buffer::Buffer;
use crate::tag::{ApiTag, ImplTag};
use zeroize::Zeroizing;

/// Operations of the 'random' interface
pub trait RandomOps: Send + Sync {
    /// Fill `dest` with random bytes
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

/// Marker for the 'random' capability
#[derive(Debug, Clone, Copy)]
pub struct Random;

impl Capability for Random {
    const API_TAG: ApiTag = ApiTag::Random;
    type Ops = dyn RandomOps;

    fn ops<'a>(api: Api<'a>) -> Option<&'a Self::Ops> {
        match api {
            Api::Random(ops) => Some(ops),
            _ => None,
        }
    }
}

/// Operation table of the 'random' interface
pub type RandomApi<'a> = ApiTable<'a, Random>;

/// Check if given object implements interface 'random'
pub fn is_implemented<H: Impl + ?Sized>(handle: &H) -> bool {
    super::is_implemented::<Random, H>(handle)
}

/// Return random API, or `None` if it is not implemented
pub fn api<H: Impl + ?Sized>(handle: &H) -> Option<RandomApi<'_>> {
    super::find::<Random, H>(handle)
}

/// Returns interface unique identifier
pub fn api_tag(random_api: &RandomApi<'_>) -> ApiTag {
    random_api.api_tag()
}

/// Returns implementation unique identifier
pub fn impl_tag(random_api: &RandomApi<'_>) -> ImplTag {
    random_api.impl_tag()
}

/// Append `len` random bytes to `out`
///
/// # Panics
///
/// Panics if `out` has fewer than `len` unused bytes.
pub fn random(random_api: &RandomApi<'_>, len: usize, out: &mut Buffer) -> Result<()> {
    assert!(
        out.unused_len() >= len,
        "contract violation: requested {} random bytes, output buffer has {} unused",
        len,
        out.unused_len()
    );

    let mut bytes = Zeroizing::new(vec![0u8; len]);
    random_api.ops().fill(&mut bytes)?;
    out.write(&bytes);
    Ok(())
}
