//! Message digests backed by the RustCrypto hash crates

use crate::Result;
use crate::buffer::Buffer;
use crate::capability::{Api, HashContext, HashInfoOps, HashOps, HashStreamOps, Impl};
use crate::tag::{ApiTag, ImplTag};
use md4::Md4;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use std::marker::PhantomData;
use tiger::Tiger;

/// Digest implementation exposing 'hash', 'hash_info' and 'hash_stream'
pub struct DigestImpl<D> {
    tag: ImplTag,
    block_len: usize,
    _digest: PhantomData<fn() -> D>,
}

impl<D> std::fmt::Debug for DigestImpl<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigestImpl")
            .field("tag", &self.tag)
            .field("block_len", &self.block_len)
            .finish()
    }
}

impl<D: Digest> DigestImpl<D> {
    fn new(tag: ImplTag, block_len: usize) -> Self {
        Self {
            tag,
            block_len,
            _digest: PhantomData,
        }
    }
}

impl DigestImpl<Md4> {
    /// MD4 (RFC 1320)
    pub fn md4() -> Self {
        Self::new(ImplTag::Md4, 64)
    }
}

impl DigestImpl<Md5> {
    /// MD5 (RFC 1321)
    pub fn md5() -> Self {
        Self::new(ImplTag::Md5, 64)
    }
}

impl DigestImpl<Sha1> {
    /// SHA-1
    pub fn sha1() -> Self {
        Self::new(ImplTag::Sha1, 64)
    }
}

impl DigestImpl<Sha224> {
    /// SHA-224
    pub fn sha224() -> Self {
        Self::new(ImplTag::Sha224, 64)
    }
}

impl DigestImpl<Sha256> {
    /// SHA-256
    pub fn sha256() -> Self {
        Self::new(ImplTag::Sha256, 64)
    }
}

impl DigestImpl<Sha384> {
    /// SHA-384
    pub fn sha384() -> Self {
        Self::new(ImplTag::Sha384, 128)
    }
}

impl DigestImpl<Sha512> {
    /// SHA-512
    pub fn sha512() -> Self {
        Self::new(ImplTag::Sha512, 128)
    }
}

impl DigestImpl<Tiger> {
    /// Tiger-192
    pub fn tiger() -> Self {
        Self::new(ImplTag::Tiger, 64)
    }
}

impl<D: Digest + Send + 'static> HashInfoOps for DigestImpl<D> {
    fn digest_len(&self) -> usize {
        <D as Digest>::output_size()
    }

    fn block_len(&self) -> usize {
        self.block_len
    }
}

impl<D: Digest + Send + 'static> HashOps for DigestImpl<D> {
    fn hash(&self, data: &[u8], digest: &mut Buffer) -> Result<()> {
        digest.write(&<D as Digest>::digest(data));
        Ok(())
    }
}

impl<D: Digest + Send + 'static> HashStreamOps for DigestImpl<D> {
    fn start(&self) -> Box<dyn HashContext> {
        Box::new(DigestContext::<D> {
            hasher: <D as Digest>::new(),
        })
    }
}

impl<D: Digest + Send + 'static> Impl for DigestImpl<D> {
    fn impl_tag(&self) -> ImplTag {
        self.tag
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

/// Running digest over a RustCrypto hasher
struct DigestContext<D> {
    hasher: D,
}

impl<D: Digest + Send> HashContext for DigestContext<D> {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.hasher, data);
    }

    fn finish(self: Box<Self>, digest: &mut Buffer) -> Result<()> {
        digest.write(&Digest::finalize(self.hasher));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::hash;

    fn hex_digest<H: Impl>(implementation: &H, data: &[u8]) -> String {
        let hash_api = hash::api(implementation).unwrap();
        let mut digest = Buffer::with_capacity(hash_api.ops().digest_len());
        hash::compute(&hash_api, data, &mut digest).unwrap();
        digest.to_hex()
    }

    #[test]
    fn test_known_vectors_abc() {
        assert_eq!(
            hex_digest(&DigestImpl::md4(), b"abc"),
            "a448017aaf21d8525fc10ae87aa6729d"
        );
        assert_eq!(
            hex_digest(&DigestImpl::md5(), b"abc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            hex_digest(&DigestImpl::sha1(), b"abc"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            hex_digest(&DigestImpl::sha224(), b"abc"),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
        assert_eq!(
            hex_digest(&DigestImpl::sha256(), b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            hex_digest(&DigestImpl::sha384(), b"abc"),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
        );
        assert_eq!(
            hex_digest(&DigestImpl::sha512(), b"abc"),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            hex_digest(&DigestImpl::sha256(), b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hex_digest(&DigestImpl::md4(), b""),
            "31d6cfe0d16ae931b73c59d7e0c089c0"
        );
    }

    #[test]
    fn test_digest_lengths() {
        let cases: Vec<(Box<dyn Impl>, usize, usize)> = vec![
            (Box::new(DigestImpl::md4()), 16, 64),
            (Box::new(DigestImpl::md5()), 16, 64),
            (Box::new(DigestImpl::sha1()), 20, 64),
            (Box::new(DigestImpl::sha224()), 28, 64),
            (Box::new(DigestImpl::sha256()), 32, 64),
            (Box::new(DigestImpl::sha384()), 48, 128),
            (Box::new(DigestImpl::sha512()), 64, 128),
            (Box::new(DigestImpl::tiger()), 24, 64),
        ];

        for (implementation, digest_len, block_len) in cases {
            let hash_api = hash::api(implementation.as_ref()).unwrap();
            assert_eq!(hash_api.ops().digest_len(), digest_len, "{}", hash_api.impl_tag());
            assert_eq!(hash_api.ops().block_len(), block_len, "{}", hash_api.impl_tag());
        }
    }

    #[test]
    fn test_digest_impls_do_not_expose_random() {
        let sha256 = DigestImpl::sha256();
        assert_eq!(
            sha256.api_tags(),
            vec![ApiTag::Hash, ApiTag::HashInfo, ApiTag::HashStream]
        );
    }
}
