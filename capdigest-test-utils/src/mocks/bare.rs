//! Implementation exposing no capability at all

use capdigest_core::capability::{Api, Impl};
use capdigest_core::{ApiTag, ImplTag};

/// Tag of [`BareImpl`]
pub const BARE_IMPL_TAG: ImplTag = ImplTag::external(4);

/// Implementation answering every capability query with `None`
#[derive(Debug, Clone, Copy, Default)]
pub struct BareImpl;

impl Impl for BareImpl {
    fn impl_tag(&self) -> ImplTag {
        BARE_IMPL_TAG
    }

    fn find_api(&self, _api_tag: ApiTag) -> Option<Api<'_>> {
        None
    }
}
