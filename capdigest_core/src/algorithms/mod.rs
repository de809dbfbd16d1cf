//! Built-in algorithm implementations
//!
//! The algorithms themselves come from external crates; this module only
//! binds them to the capability interfaces.

use crate::capability::Impl;
use crate::tag::ImplTag;
use std::sync::Arc;

pub mod crc32;
pub mod digest;
pub mod system_random;

pub use crc32::Crc32Impl;
pub use digest::DigestImpl;
pub use system_random::SystemRandom;

/// Construct the built-in implementation behind `tag`
///
/// Returns `None` for external tags.
pub fn builtin(tag: ImplTag) -> Option<Arc<dyn Impl>> {
    let implementation: Arc<dyn Impl> = match tag {
        ImplTag::Md4 => Arc::new(DigestImpl::md4()),
        ImplTag::Md5 => Arc::new(DigestImpl::md5()),
        ImplTag::Sha1 => Arc::new(DigestImpl::sha1()),
        ImplTag::Sha224 => Arc::new(DigestImpl::sha224()),
        ImplTag::Sha256 => Arc::new(DigestImpl::sha256()),
        ImplTag::Sha384 => Arc::new(DigestImpl::sha384()),
        ImplTag::Sha512 => Arc::new(DigestImpl::sha512()),
        ImplTag::Tiger => Arc::new(DigestImpl::tiger()),
        ImplTag::Crc32 => Arc::new(Crc32Impl),
        ImplTag::SystemRandom => Arc::new(SystemRandom),
        ImplTag::External(_) => return None,
    };
    Some(implementation)
}
