//! Runtime capability discovery over opaque implementation handles
//!
//! An implementation is any type implementing [`Impl`]. Callers holding a
//! handle ask whether it exposes a capability and, if it does, obtain an
//! [`ApiTable`] bound to that handle. Each capability module (`hash`,
//! `hash_info`, `hash_stream`, `random`) adds its typed entry points on top
//! of the generic queries defined here.
//!
//! Lookup goes through the handle's own `find_api`, a single virtual call
//! that matches on the requested [`ApiTag`]. No registry scan is involved.

use crate::tag::{ApiTag, ImplTag};

pub mod hash;
pub mod hash_info;
pub mod hash_stream;
pub mod random;

pub use hash::{Hash, HashApi, HashOps};
pub use hash_info::{HashInfo, HashInfoApi, HashInfoOps};
pub use hash_stream::{HashContext, HashStream, HashStreamApi, HashStreamOps};
pub use random::{Random, RandomApi, RandomOps};

/// An opaque algorithm implementation
///
/// The dispatch layer only borrows implementations; construction and
/// destruction happen elsewhere.
pub trait Impl: Send + Sync + std::fmt::Debug {
    /// Identifier of the concrete algorithm
    fn impl_tag(&self) -> ImplTag;

    /// Operation table for the requested capability, or `None` when the
    /// implementation does not expose it
    fn find_api(&self, api_tag: ApiTag) -> Option<Api<'_>>;

    /// Capabilities this implementation exposes
    fn api_tags(&self) -> Vec<ApiTag> {
        ApiTag::ALL
            .into_iter()
            .filter(|tag| self.find_api(*tag).is_some_and(|api| api.api_tag() == *tag))
            .collect()
    }
}

/// Capability operations exposed by one implementation
#[derive(Clone, Copy)]
pub enum Api<'a> {
    Hash(&'a (dyn HashOps + 'static)),
    HashInfo(&'a (dyn HashInfoOps + 'static)),
    HashStream(&'a (dyn HashStreamOps + 'static)),
    Random(&'a (dyn RandomOps + 'static)),
}

impl Api<'_> {
    /// Capability carried by this variant
    pub fn api_tag(&self) -> ApiTag {
        match self {
            Api::Hash(_) => ApiTag::Hash,
            Api::HashInfo(_) => ApiTag::HashInfo,
            Api::HashStream(_) => ApiTag::HashStream,
            Api::Random(_) => ApiTag::Random,
        }
    }
}

impl std::fmt::Debug for Api<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Api").field(&self.api_tag()).finish()
    }
}

/// Marker for one capability kind
pub trait Capability {
    /// The fixed tag shared by every implementation of this capability
    const API_TAG: ApiTag;

    /// Operation set of this capability
    type Ops: ?Sized + 'static;

    /// Narrow a generic [`Api`] to this capability's operations
    fn ops<'a>(api: Api<'a>) -> Option<&'a Self::Ops>;
}

/// Operation table of one capability bound to one implementation
///
/// The table borrows the implementation it was obtained from and cannot
/// outlive it.
pub struct ApiTable<'a, C: Capability> {
    impl_tag: ImplTag,
    ops: &'a C::Ops,
}

impl<'a, C: Capability> ApiTable<'a, C> {
    pub(crate) fn new(impl_tag: ImplTag, ops: &'a C::Ops) -> Self {
        Self { impl_tag, ops }
    }

    /// The capability identifier baked into this table
    pub fn api_tag(&self) -> ApiTag {
        C::API_TAG
    }

    /// The implementation backing this table
    pub fn impl_tag(&self) -> ImplTag {
        self.impl_tag
    }

    /// The operations of this table
    pub fn ops(&self) -> &'a C::Ops {
        self.ops
    }
}

impl<C: Capability> Clone for ApiTable<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Capability> Copy for ApiTable<'_, C> {}

impl<C: Capability> std::fmt::Debug for ApiTable<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiTable")
            .field("api_tag", &C::API_TAG)
            .field("impl_tag", &self.impl_tag)
            .finish()
    }
}

/// Check if `handle` implements capability `C`
pub fn is_implemented<C: Capability, H: Impl + ?Sized>(handle: &H) -> bool {
    find::<C, H>(handle).is_some()
}

/// Return the operation table of capability `C`, or `None` if `handle`
/// does not implement it
///
/// An implementation answering with a table of another capability is
/// treated as not implementing `C`.
pub fn find<C: Capability, H: Impl + ?Sized>(handle: &H) -> Option<ApiTable<'_, C>> {
    let Some(api) = handle.find_api(C::API_TAG) else {
        log::trace!("{} does not implement {}", handle.impl_tag(), C::API_TAG);
        return None;
    };

    match C::ops(api) {
        Some(ops) => Some(ApiTable::new(handle.impl_tag(), ops)),
        None => {
            log::warn!(
                "{} answered {} request with {} table",
                handle.impl_tag(),
                C::API_TAG,
                api.api_tag()
            );
            None
        }
    }
}
