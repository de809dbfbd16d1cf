//! Central registry for algorithm implementations
//!
//! The registry hands out shared implementation handles by tag or name. It
//! is not involved in capability dispatch itself: once a caller holds a
//! handle, queries go straight to the handle.

use crate::algorithms;
use crate::buffer::Buffer;
use crate::capability::{Impl, hash};
use crate::config::RegistryConfig;
use crate::error::{InternalError, ValidationError};
use crate::tag::{ApiTag, ImplTag};
use crate::{Error, Result};
use log::{debug, warn};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Central registry for all algorithm implementations
#[derive(Debug)]
pub struct AlgorithmRegistry {
    implementations: RwLock<HashMap<ImplTag, Arc<dyn Impl>>>,
    verify_digest_len: bool,
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            implementations: RwLock::new(HashMap::new()),
            verify_digest_len: true,
        }
    }

    /// Create a registry holding every built-in implementation
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for tag in ImplTag::BUILTIN {
            if let Some(implementation) = algorithms::builtin(tag) {
                registry.insert(implementation);
            }
        }
        registry
    }

    /// Create a registry from configuration
    ///
    /// An empty `enabled` list enables every built-in. External tags cannot
    /// be enabled from configuration; register them explicitly.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let mut registry = if config.enabled.is_empty() {
            Self::with_builtins()
        } else {
            let registry = Self::new();
            for tag in &config.enabled {
                let implementation = algorithms::builtin(*tag).ok_or_else(|| {
                    ValidationError::invalid_configuration(&format!(
                        "'{tag}' is not a built-in implementation"
                    ))
                })?;
                registry.register_arc(implementation)?;
            }
            registry
        };

        registry.verify_digest_len = config.verify_digest_len;
        debug!(
            "Registry configured with {} implementations (verify digest length: {})",
            registry.len(),
            registry.verify_digest_len
        );
        Ok(registry)
    }

    /// Get the global registry instance
    pub fn global() -> &'static Self {
        static INSTANCE: OnceCell<AlgorithmRegistry> = OnceCell::new();
        INSTANCE.get_or_init(Self::with_builtins)
    }

    /// Register a new implementation
    ///
    /// Fails if an implementation with the same tag is already registered.
    pub fn register(&self, implementation: impl Impl + 'static) -> Result<()> {
        self.register_arc(Arc::new(implementation))
    }

    /// Register an already shared implementation
    pub fn register_arc(&self, implementation: Arc<dyn Impl>) -> Result<()> {
        let tag = implementation.impl_tag();
        let mut implementations = self
            .implementations
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if implementations.contains_key(&tag) {
            warn!("Rejected duplicate registration of {tag}");
            return Err(ValidationError::duplicate_implementation(tag).into());
        }

        debug!(
            "Registered {tag} (tag {}) exposing {:?}",
            tag.as_u16(),
            implementation.api_tags()
        );
        implementations.insert(tag, implementation);
        Ok(())
    }

    fn insert(&self, implementation: Arc<dyn Impl>) {
        let mut implementations = self
            .implementations
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        implementations.insert(implementation.impl_tag(), implementation);
    }

    /// Get implementation by tag
    pub fn get(&self, tag: ImplTag) -> Option<Arc<dyn Impl>> {
        let implementations = self
            .implementations
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        implementations.get(&tag).cloned()
    }

    /// Get implementation by name, e.g. `"sha256"` or `"external:7"`
    pub fn by_name(&self, name: &str) -> Result<Arc<dyn Impl>> {
        let tag: ImplTag = name.parse()?;
        self.get(tag)
            .ok_or_else(|| Error::Validation(ValidationError::unknown_implementation(name)))
    }

    /// List all registered tags in numeric order
    pub fn list(&self) -> Vec<ImplTag> {
        let implementations = self
            .implementations
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut tags: Vec<_> = implementations.keys().copied().collect();
        tags.sort_by_key(|tag| tag.as_u16());
        tags
    }

    /// List registered tags whose implementation exposes `api_tag`
    pub fn implementing(&self, api_tag: ApiTag) -> Vec<ImplTag> {
        let implementations = self
            .implementations
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut tags: Vec<_> = implementations
            .iter()
            .filter(|(_, implementation)| implementation.api_tags().contains(&api_tag))
            .map(|(tag, _)| *tag)
            .collect();
        tags.sort_by_key(|tag| tag.as_u16());
        tags
    }

    /// Number of registered implementations
    pub fn len(&self) -> usize {
        self.implementations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether name-driven hashing checks the written length against
    /// the declared digest length
    pub fn verify_digest_len(&self) -> bool {
        self.verify_digest_len
    }

    /// Hash `data` with the implementation registered under `name`
    ///
    /// The output is sized from the implementation's 'hash_info'. With
    /// digest length verification on, the buffer has one block of headroom
    /// and a digest of any other length than the declared one is an
    /// [`InternalError::AlgorithmFailure`].
    ///
    /// # Panics
    ///
    /// Panics if the implementation writes past the buffer: more than the
    /// declared length without verification, or more than one extra block
    /// with it.
    pub fn hash(&self, name: &str, data: &[u8]) -> Result<Vec<u8>> {
        let implementation = self.by_name(name)?;
        let hash_api = hash::api(implementation.as_ref()).ok_or_else(|| {
            ValidationError::invalid_parameter(name, "implementation does not expose 'hash'")
        })?;

        let digest_len = hash_api.ops().digest_len();
        if !self.verify_digest_len {
            return hash::compute_vec(&hash_api, data);
        }

        let headroom = hash_api.ops().block_len().max(1);
        let mut digest = Buffer::with_capacity(digest_len + headroom);
        hash::compute(&hash_api, data, &mut digest)?;

        if digest.len() != digest_len {
            warn!(
                "{} wrote {} digest bytes, declared {digest_len}",
                hash_api.impl_tag(),
                digest.len()
            );
            return Err(Error::Internal(InternalError::algorithm_failure(
                name,
                format!("wrote {} bytes, declared {digest_len}", digest.len()),
            )));
        }
        Ok(digest.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{Crc32Impl, DigestImpl};
    use crate::capability::{Api, HashInfoOps, HashOps};

    #[test]
    fn test_builtins_registered() {
        let registry = AlgorithmRegistry::with_builtins();
        assert_eq!(registry.len(), ImplTag::BUILTIN.len());
        assert_eq!(registry.list(), ImplTag::BUILTIN.to_vec());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let registry = AlgorithmRegistry::new();
        registry.register(Crc32Impl).unwrap();

        let result = registry.register(Crc32Impl);
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::DuplicateImplementation { .. }))
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_by_name() {
        let registry = AlgorithmRegistry::with_builtins();

        let sha256 = registry.by_name("sha256").unwrap();
        assert_eq!(sha256.impl_tag(), ImplTag::Sha256);

        assert!(registry.by_name("whirlpool").is_err());
        assert!(registry.by_name("external:9").is_err());
    }

    #[test]
    fn test_implementing_hash_excludes_random() {
        let registry = AlgorithmRegistry::with_builtins();

        let hashers = registry.implementing(ApiTag::Hash);
        assert!(hashers.contains(&ImplTag::Sha1));
        assert!(hashers.contains(&ImplTag::Crc32));
        assert!(!hashers.contains(&ImplTag::SystemRandom));

        assert_eq!(registry.implementing(ApiTag::Random), vec![ImplTag::SystemRandom]);
    }

    #[test]
    fn test_hash_by_name() {
        let registry = AlgorithmRegistry::with_builtins();
        let digest = registry.hash("crc32", b"123456789").unwrap();
        assert_eq!(digest, vec![0xcb, 0xf4, 0x39, 0x26]);
    }

    #[test]
    fn test_hash_by_name_without_hash_capability() {
        let registry = AlgorithmRegistry::with_builtins();
        let result = registry.hash("system_random", b"abc");

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidParameter { .. }))
        ));
    }

    #[test]
    fn test_from_config_enabled_subset() {
        let config = RegistryConfig {
            enabled: vec![ImplTag::Sha256, ImplTag::Md5],
            verify_digest_len: false,
        };
        let registry = AlgorithmRegistry::from_config(&config).unwrap();

        assert_eq!(registry.list(), vec![ImplTag::Md5, ImplTag::Sha256]);
        assert!(!registry.verify_digest_len());
        assert!(registry.get(ImplTag::Sha1).is_none());
    }

    #[test]
    fn test_from_config_rejects_external_and_duplicates() {
        let external = RegistryConfig {
            enabled: vec![ImplTag::external(3)],
            verify_digest_len: true,
        };
        assert!(AlgorithmRegistry::from_config(&external).is_err());

        let duplicate = RegistryConfig {
            enabled: vec![ImplTag::Md4, ImplTag::Md4],
            verify_digest_len: true,
        };
        assert!(AlgorithmRegistry::from_config(&duplicate).is_err());
    }

    #[derive(Debug)]
    struct OversizedDigest;

    impl HashInfoOps for OversizedDigest {
        fn digest_len(&self) -> usize {
            4
        }

        fn block_len(&self) -> usize {
            4
        }
    }

    impl HashOps for OversizedDigest {
        fn hash(&self, _data: &[u8], digest: &mut Buffer) -> Result<()> {
            digest.write(&[0xAA; 5]);
            Ok(())
        }
    }

    impl Impl for OversizedDigest {
        fn impl_tag(&self) -> ImplTag {
            ImplTag::external(77)
        }

        fn find_api(&self, api_tag: ApiTag) -> Option<Api<'_>> {
            match api_tag {
                ApiTag::Hash => Some(Api::Hash(self)),
                ApiTag::HashInfo => Some(Api::HashInfo(self)),
                _ => None,
            }
        }
    }

    #[test]
    fn test_hash_oversized_digest_is_an_error() {
        let registry = AlgorithmRegistry::new();
        registry.register(OversizedDigest).unwrap();
        assert!(registry.verify_digest_len());

        let result = registry.hash("external:77", b"abc");
        assert!(matches!(
            result,
            Err(Error::Internal(InternalError::AlgorithmFailure { .. }))
        ));
    }

    #[test]
    fn test_handles_are_shared() {
        let registry = AlgorithmRegistry::new();
        registry.register(DigestImpl::tiger()).unwrap();

        let first = registry.get(ImplTag::Tiger).unwrap();
        let second = registry.get(ImplTag::Tiger).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
