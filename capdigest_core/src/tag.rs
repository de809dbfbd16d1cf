//! Stable identities for capabilities and implementations
//!
//! Both tags carry a fixed numeric value usable for dispatch tables,
//! serialization and diagnostics. The numbers never change between builds.

use crate::{Error, Result, error::ValidationError};
use serde::{Deserialize, Serialize};

/// Identifies a capability (an API shape such as "hash")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiTag {
    /// Single-shot digest over a contiguous input
    Hash,
    /// Digest size and block size metadata
    HashInfo,
    /// Incremental digest over chunked input
    HashStream,
    /// Random byte generation
    Random,
}

impl ApiTag {
    /// All capability tags in numeric order
    pub const ALL: [ApiTag; 4] = [
        ApiTag::Hash,
        ApiTag::HashInfo,
        ApiTag::HashStream,
        ApiTag::Random,
    ];

    /// Stable numeric value of this tag
    pub const fn as_u16(self) -> u16 {
        match self {
            ApiTag::Hash => 1,
            ApiTag::HashInfo => 2,
            ApiTag::HashStream => 3,
            ApiTag::Random => 4,
        }
    }
}

impl TryFrom<u16> for ApiTag {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        ApiTag::ALL
            .into_iter()
            .find(|tag| tag.as_u16() == value)
            .ok_or_else(|| {
                Error::Validation(ValidationError::invalid_parameter(
                    "api_tag",
                    &format!("no capability has tag {value}"),
                ))
            })
    }
}

impl std::fmt::Display for ApiTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiTag::Hash => write!(f, "hash"),
            ApiTag::HashInfo => write!(f, "hash_info"),
            ApiTag::HashStream => write!(f, "hash_stream"),
            ApiTag::Random => write!(f, "random"),
        }
    }
}

/// Identifies a concrete algorithm implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplTag {
    /// MD4 digest
    Md4,
    /// MD5 digest
    Md5,
    /// SHA-1 digest
    Sha1,
    /// SHA-224 digest
    Sha224,
    /// SHA-256 digest
    Sha256,
    /// SHA-384 digest
    Sha384,
    /// SHA-512 digest
    Sha512,
    /// Tiger-192 digest
    Tiger,
    /// CRC-32 (IEEE) checksum
    Crc32,
    /// Operating system entropy source
    SystemRandom,
    /// Implementation supplied outside this crate, identified by its own id
    External(ExternalId),
}

/// Id of an external implementation, limited to 15 bits
///
/// Built only through [`ImplTag::external`], [`ExternalId::new`] or the
/// checked conversions, so every id maps to exactly one numeric tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct ExternalId(u16);

impl ExternalId {
    /// Largest valid id
    pub const MAX: u16 = !ImplTag::EXTERNAL_FLAG;

    /// Checked constructor; `None` when `id` uses the external flag bit
    pub const fn new(id: u16) -> Option<Self> {
        if id & ImplTag::EXTERNAL_FLAG == 0 {
            Some(Self(id))
        } else {
            None
        }
    }

    /// The raw id
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for ExternalId {
    type Error = Error;

    fn try_from(id: u16) -> Result<Self> {
        Self::new(id).ok_or_else(|| {
            Error::Validation(ValidationError::invalid_parameter(
                "external_id",
                &format!("{id} exceeds {}", Self::MAX),
            ))
        })
    }
}

impl From<ExternalId> for u16 {
    fn from(id: ExternalId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ExternalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ImplTag {
    /// Built-in implementation tags in numeric order
    pub const BUILTIN: [ImplTag; 10] = [
        ImplTag::Md4,
        ImplTag::Md5,
        ImplTag::Sha1,
        ImplTag::Sha224,
        ImplTag::Sha256,
        ImplTag::Sha384,
        ImplTag::Sha512,
        ImplTag::Tiger,
        ImplTag::Crc32,
        ImplTag::SystemRandom,
    ];

    /// High bit marking an external tag in its numeric form
    pub const EXTERNAL_FLAG: u16 = 0x8000;

    /// Create a tag for an external implementation
    ///
    /// # Panics
    ///
    /// Panics if `id` collides with the external flag bit.
    pub const fn external(id: u16) -> Self {
        match ExternalId::new(id) {
            Some(id) => ImplTag::External(id),
            None => panic!("external id must fit in 15 bits"),
        }
    }

    /// Stable numeric value of this tag
    pub const fn as_u16(self) -> u16 {
        match self {
            ImplTag::Md4 => 1,
            ImplTag::Md5 => 2,
            ImplTag::Sha1 => 3,
            ImplTag::Sha224 => 4,
            ImplTag::Sha256 => 5,
            ImplTag::Sha384 => 6,
            ImplTag::Sha512 => 7,
            ImplTag::Tiger => 8,
            ImplTag::Crc32 => 9,
            ImplTag::SystemRandom => 10,
            ImplTag::External(id) => Self::EXTERNAL_FLAG | id.0,
        }
    }

    /// Whether this tag names a built-in implementation
    pub fn is_builtin(self) -> bool {
        !matches!(self, ImplTag::External(_))
    }
}

impl TryFrom<u16> for ImplTag {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        if value & Self::EXTERNAL_FLAG != 0 {
            return Ok(ImplTag::External(ExternalId(value & !Self::EXTERNAL_FLAG)));
        }

        ImplTag::BUILTIN
            .into_iter()
            .find(|tag| tag.as_u16() == value)
            .ok_or_else(|| {
                Error::Validation(ValidationError::invalid_parameter(
                    "impl_tag",
                    &format!("no built-in implementation has tag {value}"),
                ))
            })
    }
}

impl std::fmt::Display for ImplTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImplTag::Md4 => write!(f, "md4"),
            ImplTag::Md5 => write!(f, "md5"),
            ImplTag::Sha1 => write!(f, "sha1"),
            ImplTag::Sha224 => write!(f, "sha224"),
            ImplTag::Sha256 => write!(f, "sha256"),
            ImplTag::Sha384 => write!(f, "sha384"),
            ImplTag::Sha512 => write!(f, "sha512"),
            ImplTag::Tiger => write!(f, "tiger"),
            ImplTag::Crc32 => write!(f, "crc32"),
            ImplTag::SystemRandom => write!(f, "system_random"),
            ImplTag::External(id) => write!(f, "external:{id}"),
        }
    }
}

impl std::str::FromStr for ImplTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();

        if let Some(id) = lowered.strip_prefix("external:") {
            return id
                .parse::<u16>()
                .ok()
                .and_then(ExternalId::new)
                .map(ImplTag::External)
                .ok_or_else(|| Error::Validation(ValidationError::unknown_implementation(s)));
        }

        ImplTag::BUILTIN
            .into_iter()
            .find(|tag| tag.to_string() == lowered)
            .ok_or_else(|| Error::Validation(ValidationError::unknown_implementation(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_api_tags_are_unique_and_round_trip() {
        let values: HashSet<u16> = ApiTag::ALL.iter().map(|tag| tag.as_u16()).collect();
        assert_eq!(values.len(), ApiTag::ALL.len());

        for tag in ApiTag::ALL {
            assert_eq!(ApiTag::try_from(tag.as_u16()).unwrap(), tag);
        }
    }

    #[test]
    fn test_unknown_api_tag_rejected() {
        assert!(ApiTag::try_from(0).is_err());
        assert!(ApiTag::try_from(999).is_err());
    }

    #[test]
    fn test_builtin_impl_tags_are_stable() {
        assert_eq!(ImplTag::Md4.as_u16(), 1);
        assert_eq!(ImplTag::Sha256.as_u16(), 5);
        assert_eq!(ImplTag::SystemRandom.as_u16(), 10);

        let values: HashSet<u16> = ImplTag::BUILTIN.iter().map(|tag| tag.as_u16()).collect();
        assert_eq!(values.len(), ImplTag::BUILTIN.len());
    }

    #[test]
    fn test_external_tag_numeric_form() {
        let tag = ImplTag::external(7);
        assert_eq!(tag.as_u16(), 0x8007);
        assert!(!tag.is_builtin());
        assert_eq!(ImplTag::try_from(0x8007).unwrap(), tag);
    }

    #[test]
    #[should_panic(expected = "external id must fit in 15 bits")]
    fn test_external_tag_rejects_flag_bit() {
        let _ = ImplTag::external(0x8000);
    }

    #[test]
    fn test_impl_tag_display_and_parse() {
        for tag in ImplTag::BUILTIN {
            let parsed: ImplTag = tag.to_string().parse().unwrap();
            assert_eq!(parsed, tag);
        }

        assert_eq!("SHA256".parse::<ImplTag>().unwrap(), ImplTag::Sha256);
        assert_eq!(
            "external:42".parse::<ImplTag>().unwrap(),
            ImplTag::external(42)
        );
        assert!("whirlpool".parse::<ImplTag>().is_err());
        assert!("external:40000".parse::<ImplTag>().is_err());
    }

    #[test]
    fn test_impl_tag_serde_names() {
        let json = serde_json::to_string(&vec![ImplTag::Sha512, ImplTag::SystemRandom]).unwrap();
        assert_eq!(json, r#"["sha512","system_random"]"#);

        let tags: Vec<ImplTag> = serde_json::from_str(r#"["md5","crc32"]"#).unwrap();
        assert_eq!(tags, vec![ImplTag::Md5, ImplTag::Crc32]);
    }

    #[test]
    fn test_external_tag_serde_checks_id() {
        let json = serde_json::to_string(&ImplTag::external(7)).unwrap();
        assert_eq!(json, r#"{"external":7}"#);
        assert_eq!(
            serde_json::from_str::<ImplTag>(&json).unwrap(),
            ImplTag::external(7)
        );

        assert!(serde_json::from_str::<ImplTag>(r#"{"external":40000}"#).is_err());
        assert!(serde_json::from_str::<ImplTag>(r#"{"external":32768}"#).is_err());
        assert!(serde_json::from_str::<ImplTag>(r#"{"external":32767}"#).is_ok());
    }

    #[test]
    fn test_external_ids_map_to_distinct_numbers() {
        assert!(ExternalId::new(0x8001).is_none());
        assert!(ExternalId::try_from(0x8001).is_err());
        assert_eq!(ExternalId::new(ExternalId::MAX).map(ExternalId::get), Some(0x7fff));

        let values: HashSet<u16> = (0..=ExternalId::MAX)
            .step_by(97)
            .map(|id| ImplTag::external(id).as_u16())
            .collect();
        assert_eq!(values.len(), (0..=ExternalId::MAX).step_by(97).count());

        for value in [0x8000, 0x8001, 0xffff] {
            let tag = ImplTag::try_from(value).unwrap();
            assert_eq!(tag.as_u16(), value);
        }
    }
}
