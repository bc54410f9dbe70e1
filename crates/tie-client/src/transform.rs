//! Conversions between the service wire format and the domain types.
//!
//! The service identifies subjects with arrays of `{type, value}` hash
//! objects where `value` is base64 of the raw digest bytes; callers work
//! with maps keyed by algorithm holding lowercase hex. Reputation
//! responses arrive as arrays of per-provider records and are flattened
//! into maps keyed by provider id. A normalization step either fully
//! succeeds or the whole body is rejected; there are no partial results.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tie_core::{
    CertificateRelationship, DetectionEvent, FirstInstanceEvent, FirstReference, HashAlgorithm,
    HashDigests, Overridden, OverriddenFile, ReputationChangeEvent, ReputationMap,
    ReputationRecord, Result, TieError,
};

/// A single hash entry in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireHash {
    /// Hash algorithm identifier.
    #[serde(rename = "type")]
    pub algorithm: HashAlgorithm,

    /// Base64 of the raw digest bytes.
    pub value: String,
}

/// A reputation record in wire form.
///
/// Matches the domain [`ReputationRecord`] except that overridden file
/// hashes are still wire-form arrays.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireReputation {
    /// Provider that produced this reputation.
    pub provider_id: i64,
    /// Numeric trust score.
    pub trust_level: i64,
    /// Creation time as epoch seconds.
    #[serde(default)]
    pub create_date: i64,
    /// Attributes keyed by decimal-string attribute id.
    #[serde(default)]
    pub attributes: std::collections::BTreeMap<String, String>,
    /// Enterprise file overrides, hashes still in wire form.
    #[serde(default)]
    pub overridden: Option<WireOverridden>,
}

/// Wire form of a certificate's file override list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireOverridden {
    /// The overridden files.
    #[serde(default)]
    pub files: Vec<WireOverriddenFile>,
    /// Whether the list was truncated by the service.
    #[serde(default)]
    pub truncated: bool,
}

/// Wire form of one overridden file entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireOverriddenFile {
    /// Digests in wire form.
    #[serde(default)]
    pub hashes: Vec<WireHash>,
}

/// Response body of a reputation lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireReputationList {
    /// Per-provider reputation records; absent means no reputations.
    #[serde(default)]
    pub reputations: Vec<WireReputation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireReputationChange {
    #[serde(default)]
    hashes: Vec<WireHash>,
    new_reputations: Option<WireReputationList>,
    old_reputations: Option<WireReputationList>,
    #[serde(default)]
    update_time: i64,
    relationships: Option<WireRelationships>,
    public_key_sha1: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct WireRelationships {
    certificate: Option<WireCertificate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCertificate {
    #[serde(default)]
    hashes: Vec<WireHash>,
    public_key_sha1: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDetection {
    agent_guid: String,
    #[serde(default)]
    hashes: Vec<WireHash>,
    #[serde(default)]
    detection_time: i64,
    #[serde(default)]
    local_reputation: i64,
    #[serde(default)]
    name: String,
    remediation_action: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireFirstInstance {
    agent_guid: String,
    #[serde(default)]
    hashes: Vec<WireHash>,
    #[serde(default)]
    name: String,
}

/// Re-encode a hex digest as base64 of the raw bytes.
///
/// Accepts upper- or lower-case hex.
pub fn hex_to_base64(hex_value: &str) -> Result<String> {
    let bytes = hex::decode(hex_value)
        .map_err(|e| TieError::Codec(format!("invalid hex digest '{hex_value}': {e}")))?;
    Ok(BASE64.encode(bytes))
}

/// Re-encode a base64 digest as lowercase hex.
pub fn base64_to_hex(base64_value: &str) -> Result<String> {
    let bytes = BASE64
        .decode(base64_value)
        .map_err(|e| TieError::Codec(format!("invalid base64 digest: {e}")))?;
    Ok(hex::encode(bytes))
}

/// Convert a caller-facing hash map into the wire-form array.
///
/// Output order follows the map's iteration order; the service does not
/// assign meaning to the order.
pub fn hashes_to_wire(hashes: &HashDigests) -> Result<Vec<WireHash>> {
    hashes
        .iter()
        .map(|(algorithm, hex_value)| {
            Ok(WireHash {
                algorithm: *algorithm,
                value: hex_to_base64(hex_value)?,
            })
        })
        .collect()
}

/// Convert a wire-form hash array into the caller-facing map.
pub fn hashes_from_wire(hashes: &[WireHash]) -> Result<HashDigests> {
    hashes
        .iter()
        .map(|hash| Ok((hash.algorithm, base64_to_hex(&hash.value)?)))
        .collect()
}

fn reputation_from_wire(wire: WireReputation) -> Result<ReputationRecord> {
    let overridden = match wire.overridden {
        Some(overridden) => Some(Overridden {
            files: overridden
                .files
                .into_iter()
                .map(|file| {
                    Ok(OverriddenFile {
                        hashes: hashes_from_wire(&file.hashes)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            truncated: overridden.truncated,
        }),
        None => None,
    };

    Ok(ReputationRecord {
        provider_id: wire.provider_id,
        trust_level: wire.trust_level,
        create_date: wire.create_date,
        attributes: wire.attributes,
        overridden,
    })
}

/// Flatten a wire reputation array into a map keyed by provider id.
///
/// If the service were ever to repeat a provider id, the last record wins.
/// Provider ids are expected to be unique in practice; this mirrors the
/// service's observed behavior and is intentional.
pub fn build_reputation_map(reputations: Vec<WireReputation>) -> Result<ReputationMap> {
    let mut map = ReputationMap::new();
    for wire in reputations {
        let record = reputation_from_wire(wire)?;
        map.insert(record.provider_id, record);
    }
    Ok(map)
}

fn payload_error(err: &serde_json::Error) -> TieError {
    TieError::Payload(format!("malformed message body: {err}"))
}

/// Parse and normalize a reputation lookup response body.
///
/// An absent or empty `reputations` field yields an empty map.
pub fn parse_reputation_response(body: &[u8]) -> Result<ReputationMap> {
    let parsed: WireReputationList =
        serde_json::from_slice(body).map_err(|e| payload_error(&e))?;
    build_reputation_map(parsed.reputations)
}

/// Response body of a first-reference lookup.
#[derive(Debug, Clone, Default, Deserialize)]
struct WireAgentList {
    #[serde(default)]
    agents: Vec<FirstReference>,
}

/// Parse a first-reference lookup response body.
///
/// An absent `agents` field yields an empty list. Order is as returned by
/// the service.
pub fn parse_first_references(body: &[u8]) -> Result<Vec<FirstReference>> {
    let parsed: WireAgentList = serde_json::from_slice(body).map_err(|e| payload_error(&e))?;
    Ok(parsed.agents)
}

/// Parse and normalize a reputation change event body.
pub fn parse_reputation_change(body: &[u8]) -> Result<ReputationChangeEvent> {
    let wire: WireReputationChange =
        serde_json::from_slice(body).map_err(|e| payload_error(&e))?;

    let relationships = match wire.relationships.and_then(|r| r.certificate) {
        Some(certificate) => Some(CertificateRelationship {
            hashes: hashes_from_wire(&certificate.hashes)?,
            public_key_sha1: certificate
                .public_key_sha1
                .as_deref()
                .map(base64_to_hex)
                .transpose()?,
        }),
        None => None,
    };

    Ok(ReputationChangeEvent {
        hashes: hashes_from_wire(&wire.hashes)?,
        new_reputations: build_reputation_map(
            wire.new_reputations.unwrap_or_default().reputations,
        )?,
        old_reputations: build_reputation_map(
            wire.old_reputations.unwrap_or_default().reputations,
        )?,
        update_time: wire.update_time,
        relationships,
        public_key_sha1: wire
            .public_key_sha1
            .as_deref()
            .map(base64_to_hex)
            .transpose()?,
    })
}

/// Parse and normalize a file detection event body.
pub fn parse_detection(body: &[u8]) -> Result<DetectionEvent> {
    let wire: WireDetection = serde_json::from_slice(body).map_err(|e| payload_error(&e))?;
    Ok(DetectionEvent {
        agent_guid: wire.agent_guid,
        hashes: hashes_from_wire(&wire.hashes)?,
        detection_time: wire.detection_time,
        local_reputation: wire.local_reputation,
        name: wire.name,
        remediation_action: wire.remediation_action,
    })
}

/// Parse and normalize a file first-instance event body.
pub fn parse_first_instance(body: &[u8]) -> Result<FirstInstanceEvent> {
    let wire: WireFirstInstance = serde_json::from_slice(body).map_err(|e| payload_error(&e))?;
    Ok(FirstInstanceEvent {
        agent_guid: wire.agent_guid,
        hashes: hashes_from_wire(&wire.hashes)?,
        name: wire.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MD5_HEX: &str = "f2c7bb8acc97f92e987a2d4087d021b1";
    const MD5_B64: &str = "8se7isyX+S6Yei1Ah9AhsQ==";
    const SHA1_HEX: &str = "7eb0139d2175739b3ccb0d1110067820be6abd29";
    const SHA1_B64: &str = "frATnSF1c5s8yw0REAZ4IL5qvSk=";
    const PUB_KEY_HEX: &str = "3b87a2d6f39770160bc3f062fb0c5da2b2e63ee9";
    const PUB_KEY_B64: &str = "O4ei1vOXcBYLw/Bi+wxdorLmPuk=";

    fn sample_hashes() -> HashDigests {
        let mut hashes = HashDigests::new();
        hashes.insert(HashAlgorithm::Md5, MD5_HEX.to_string());
        hashes.insert(HashAlgorithm::Sha1, SHA1_HEX.to_string());
        hashes
    }

    #[test]
    fn test_hashes_to_wire() {
        let wire = hashes_to_wire(&sample_hashes()).unwrap();
        assert_eq!(
            wire,
            vec![
                WireHash {
                    algorithm: HashAlgorithm::Md5,
                    value: MD5_B64.to_string()
                },
                WireHash {
                    algorithm: HashAlgorithm::Sha1,
                    value: SHA1_B64.to_string()
                },
            ]
        );
    }

    #[test]
    fn test_hashes_round_trip() {
        let wire = hashes_to_wire(&sample_hashes()).unwrap();
        assert_eq!(hashes_from_wire(&wire).unwrap(), sample_hashes());
    }

    #[test]
    fn test_uppercase_hex_round_trips_to_lowercase() {
        let mut hashes = HashDigests::new();
        hashes.insert(HashAlgorithm::Md5, MD5_HEX.to_uppercase());
        let wire = hashes_to_wire(&hashes).unwrap();
        let back = hashes_from_wire(&wire).unwrap();
        assert_eq!(back.get(&HashAlgorithm::Md5).map(String::as_str), Some(MD5_HEX));
    }

    #[test]
    fn test_invalid_hex_is_rejected() {
        let mut hashes = HashDigests::new();
        hashes.insert(HashAlgorithm::Md5, "zz".to_string());
        assert!(matches!(
            hashes_to_wire(&hashes),
            Err(TieError::Codec(_))
        ));
    }

    #[test]
    fn test_wire_hash_serde_field_names() {
        let wire = WireHash {
            algorithm: HashAlgorithm::Sha256,
            value: "AAAA".to_string(),
        };
        let value = serde_json::to_value(&wire).unwrap();
        assert_eq!(value, json!({"type": "sha256", "value": "AAAA"}));
    }

    #[test]
    fn test_reputation_response_flattens_by_provider() {
        let body = json!({
            "reputations": [
                {"providerId": 1, "trustLevel": 99, "createDate": 1451502875},
                {"providerId": 3, "trustLevel": 0, "createDate": 1451502875,
                 "attributes": {"2101652": "235"}}
            ]
        });
        let map = parse_reputation_response(body.to_string().as_bytes()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1].trust_level, 99);
        assert_eq!(map[&3].attributes.get("2101652").map(String::as_str), Some("235"));
    }

    #[test]
    fn test_duplicate_provider_id_last_wins() {
        // Provider ids are expected unique; if the service ever repeated
        // one, the later record replaces the earlier.
        let body = json!({
            "reputations": [
                {"providerId": 3, "trustLevel": 50},
                {"providerId": 3, "trustLevel": 85}
            ]
        });
        let map = parse_reputation_response(body.to_string().as_bytes()).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map[&3].trust_level, 85);
    }

    #[test]
    fn test_absent_reputations_yields_empty_map() {
        let map = parse_reputation_response(b"{}").unwrap();
        assert!(map.is_empty());
        let map = parse_reputation_response(br#"{"reputations": []}"#).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_malformed_body_is_payload_error() {
        assert!(matches!(
            parse_reputation_response(b"not json"),
            Err(TieError::Payload(_))
        ));
        assert!(matches!(
            parse_reputation_response(br#"{"reputations": [{"trustLevel": 1}]}"#),
            Err(TieError::Payload(_))
        ));
    }

    #[test]
    fn test_overridden_file_hashes_are_converted() {
        let body = json!({
            "reputations": [{
                "providerId": 4,
                "trustLevel": 99,
                "overridden": {
                    "files": [{"hashes": [{"type": "md5", "value": MD5_B64}]}],
                    "truncated": false
                }
            }]
        });
        let map = parse_reputation_response(body.to_string().as_bytes()).unwrap();
        let overridden = map[&4].overridden.as_ref().unwrap();
        assert_eq!(
            overridden.files[0].hashes.get(&HashAlgorithm::Md5).map(String::as_str),
            Some(MD5_HEX)
        );
        assert!(!overridden.truncated);
    }

    #[test]
    fn test_reputation_change_normalization() {
        let body = json!({
            "hashes": [{"type": "md5", "value": MD5_B64}],
            "newReputations": {
                "reputations": [{"providerId": 1, "trustLevel": 85}]
            },
            "oldReputations": {
                "reputations": [{"providerId": 1, "trustLevel": 50}]
            },
            "updateTime": 1481301038,
            "relationships": {
                "certificate": {
                    "hashes": [{"type": "sha1", "value": SHA1_B64}],
                    "publicKeySha1": PUB_KEY_B64
                }
            }
        });
        let event = parse_reputation_change(body.to_string().as_bytes()).unwrap();

        assert_eq!(event.hashes.get(&HashAlgorithm::Md5).map(String::as_str), Some(MD5_HEX));
        assert_eq!(event.new_reputations[&1].trust_level, 85);
        assert_eq!(event.old_reputations[&1].trust_level, 50);
        assert_eq!(event.update_time, 1481301038);

        let certificate = event.relationships.as_ref().unwrap();
        assert_eq!(
            certificate.hashes.get(&HashAlgorithm::Sha1).map(String::as_str),
            Some(SHA1_HEX)
        );
        assert_eq!(certificate.public_key_sha1.as_deref(), Some(PUB_KEY_HEX));
    }

    #[test]
    fn test_certificate_change_top_level_public_key() {
        let body = json!({
            "hashes": [{"type": "sha1", "value": SHA1_B64}],
            "publicKeySha1": PUB_KEY_B64,
            "updateTime": 1481301038
        });
        let event = parse_reputation_change(body.to_string().as_bytes()).unwrap();
        assert_eq!(event.public_key_sha1.as_deref(), Some(PUB_KEY_HEX));
        assert!(event.relationships.is_none());
        assert!(event.new_reputations.is_empty());
        assert!(event.old_reputations.is_empty());
    }

    #[test]
    fn test_parse_detection() {
        let body = json!({
            "agentGuid": "{abc}",
            "hashes": [{"type": "md5", "value": MD5_B64}],
            "detectionTime": 1481301038,
            "localReputation": 1,
            "name": "EICAR",
            "remediationAction": 5
        });
        let event = parse_detection(body.to_string().as_bytes()).unwrap();
        assert_eq!(event.agent_guid, "{abc}");
        assert_eq!(event.hashes.get(&HashAlgorithm::Md5).map(String::as_str), Some(MD5_HEX));
        assert_eq!(event.local_reputation, 1);
        assert_eq!(event.remediation_action, Some(5));
    }

    #[test]
    fn test_parse_first_instance() {
        let body = json!({
            "agentGuid": "{abc}",
            "hashes": [{"type": "sha1", "value": SHA1_B64}],
            "name": "MORPH.EXE"
        });
        let event = parse_first_instance(body.to_string().as_bytes()).unwrap();
        assert_eq!(event.name, "MORPH.EXE");
        assert_eq!(event.hashes.get(&HashAlgorithm::Sha1).map(String::as_str), Some(SHA1_HEX));
    }

    #[test]
    fn test_bad_digest_fails_whole_normalize() {
        // No partial results: one bad digest fails the entire response.
        let body = json!({
            "reputations": [{
                "providerId": 4,
                "trustLevel": 99,
                "overridden": {"files": [{"hashes": [{"type": "md5", "value": "!bad!"}]}]}
            }]
        });
        assert!(parse_reputation_response(body.to_string().as_bytes()).is_err());
    }
}
