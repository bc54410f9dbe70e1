//! Domain types shared across the TIE client workspace.
//!
//! These are the caller-facing shapes: hash sets keyed by algorithm with
//! lowercase hex values, and reputation data keyed by provider id. The
//! wire shapes (arrays of typed hash objects, base64 values) live in the
//! client crate's transform layer.

use crate::error::TieError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Hash algorithms understood by the reputation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// The MD5 algorithm (128-bit).
    Md5,
    /// The Secure Hash Algorithm 1 (SHA-1) (160-bit).
    Sha1,
    /// The Secure Hash Algorithm 2, 256 bit digest (SHA-256).
    Sha256,
}

impl HashAlgorithm {
    /// The identifier used on the wire for this algorithm.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = TieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            other => Err(TieError::Validation(format!(
                "unknown hash algorithm '{other}'"
            ))),
        }
    }
}

/// A set of digests identifying a single file or certificate.
///
/// Keys are unique per algorithm; values are lowercase hex strings.
/// Lookup operations require at least one entry.
pub type HashDigests = BTreeMap<HashAlgorithm, String>;

/// A single provider's trust assessment of a file or certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationRecord {
    /// Provider that produced this reputation.
    pub provider_id: i64,

    /// Numeric trust score (standard or provider-specific scale).
    pub trust_level: i64,

    /// When the reputation was created, as epoch seconds.
    #[serde(default)]
    pub create_date: i64,

    /// Provider-specific attributes keyed by decimal-string attribute id.
    ///
    /// Keys stay opaque strings; the catalogs in [`crate::attributes`] are
    /// the source of truth for their meaning.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Enterprise file overrides attached to a certificate reputation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overridden: Option<Overridden>,
}

/// Files whose reputations are overridden by a certificate reputation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overridden {
    /// The overridden files, each identified by its hashes.
    #[serde(default)]
    pub files: Vec<OverriddenFile>,

    /// Whether the file list was truncated by the service.
    #[serde(default)]
    pub truncated: bool,
}

/// A single file entry inside an override list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverriddenFile {
    /// Digests identifying the overridden file (hex form).
    #[serde(default)]
    pub hashes: HashDigests,
}

/// Reputations keyed by provider id, one entry per responding provider.
pub type ReputationMap = BTreeMap<i64, ReputationRecord>;

/// The earliest observation of a file or certificate by one system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstReference {
    /// GUID of the system (agent) that referenced the subject.
    pub agent_guid: String,

    /// Time of the reference, as epoch seconds.
    #[serde(default)]
    pub date: i64,
}

/// A file detection reported by a system on the fabric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionEvent {
    /// GUID of the system that detected the file.
    pub agent_guid: String,

    /// Digests identifying the detected file (hex form).
    pub hashes: HashDigests,

    /// Time of the detection, as epoch seconds.
    pub detection_time: i64,

    /// The local reputation the detecting system held for the file.
    pub local_reputation: i64,

    /// File name as seen by the detecting system.
    pub name: String,

    /// Remediation action taken, if any.
    pub remediation_action: Option<i64>,
}

/// The first time a file was seen within the local enterprise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstInstanceEvent {
    /// GUID of the system that first saw the file.
    pub agent_guid: String,

    /// Digests identifying the file (hex form).
    pub hashes: HashDigests,

    /// File name as seen by the reporting system.
    pub name: String,
}

/// A certificate related to a file whose reputation changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateRelationship {
    /// Digests identifying the certificate (hex form).
    pub hashes: HashDigests,

    /// SHA-1 of the certificate's public key, as lowercase hex.
    pub public_key_sha1: Option<String>,
}

/// A broadcast reputation change for a file or certificate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReputationChangeEvent {
    /// Digests identifying the subject (hex form).
    pub hashes: HashDigests,

    /// Reputations after the change, keyed by provider id.
    pub new_reputations: ReputationMap,

    /// Reputations before the change, keyed by provider id.
    pub old_reputations: ReputationMap,

    /// Time of the change, as epoch seconds.
    pub update_time: i64,

    /// Certificate related to a changed file reputation, when present.
    pub relationships: Option<CertificateRelationship>,

    /// SHA-1 of the public key for a changed certificate reputation,
    /// as lowercase hex.
    pub public_key_sha1: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_algorithm_roundtrip() {
        for (s, alg) in [
            ("md5", HashAlgorithm::Md5),
            ("sha1", HashAlgorithm::Sha1),
            ("sha256", HashAlgorithm::Sha256),
        ] {
            assert_eq!(alg.as_str(), s);
            assert_eq!(s.parse::<HashAlgorithm>().unwrap(), alg);
        }
        assert!("sha512".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn test_hash_algorithm_serde() {
        let json = serde_json::to_string(&HashAlgorithm::Sha256).unwrap();
        assert_eq!(json, "\"sha256\"");
        let alg: HashAlgorithm = serde_json::from_str("\"md5\"").unwrap();
        assert_eq!(alg, HashAlgorithm::Md5);
    }

    #[test]
    fn test_reputation_record_deserialization() {
        let record: ReputationRecord = serde_json::from_str(
            r#"{
                "providerId": 3,
                "trustLevel": 99,
                "createDate": 1451502875,
                "attributes": {"2101652": "235"}
            }"#,
        )
        .unwrap();

        assert_eq!(record.provider_id, 3);
        assert_eq!(record.trust_level, 99);
        assert_eq!(record.create_date, 1451502875);
        assert_eq!(record.attributes.get("2101652").map(String::as_str), Some("235"));
        assert!(record.overridden.is_none());
    }

    #[test]
    fn test_first_reference_field_names() {
        let reference: FirstReference = serde_json::from_str(
            r#"{"agentGuid": "{3a6f574a-3e6f-436d-acd4-bcde336b054d}", "date": 1475873692}"#,
        )
        .unwrap();
        assert_eq!(reference.agent_guid, "{3a6f574a-3e6f-436d-acd4-bcde336b054d}");
        assert_eq!(reference.date, 1475873692);
    }
}
