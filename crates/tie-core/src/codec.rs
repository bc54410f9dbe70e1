//! Decoders for packed attribute values.
//!
//! Two attribute encodings need decoding on the client side: the 64-bit
//! packed server version and the base64-encoded aggregate reputation
//! statistics. Both are fixed micro-formats; malformed input is a
//! [`TieError::Codec`] error rather than a padded or truncated result.

use crate::error::{Result, TieError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Number of 16-bit fields in an aggregate statistics attribute.
const AGGREGATE_FIELDS: usize = 5;

/// Decode a packed 64-bit version attribute into its four components.
///
/// The attribute value is the decimal string form of an unsigned 64-bit
/// integer packing: major in bits 56-63, minor in bits 48-55, patch in
/// bits 32-47 and build in bits 0-31.
///
/// # Example
///
/// ```
/// let version = tie_core::codec::decode_version("73183493944770750").unwrap();
/// assert_eq!(version, [1, 4, 0, 190]);
/// ```
pub fn decode_version(attrib: &str) -> Result<[u64; 4]> {
    let packed: u64 = attrib
        .trim()
        .parse()
        .map_err(|e| TieError::Codec(format!("invalid version attribute '{attrib}': {e}")))?;

    Ok([
        (packed >> 56) & 0xff,
        (packed >> 48) & 0xff,
        (packed >> 32) & 0xffff,
        packed & 0xffff_ffff,
    ])
}

/// Decode a packed version attribute into a dotted string.
///
/// ```
/// assert_eq!(
///     tie_core::codec::version_string("73183493944770750").unwrap(),
///     "1.4.0.190"
/// );
/// ```
pub fn version_string(attrib: &str) -> Result<String> {
    let version = decode_version(attrib)?;
    Ok(version.map(|part| part.to_string()).join("."))
}

/// Decode an aggregate reputation statistics attribute.
///
/// The attribute value is base64; the decoded bytes are five consecutive
/// little-endian 16-bit unsigned integers:
/// `[file_count, max_trust_level, min_trust_level, last_trust_level,
/// average_trust_level]`. The average is transmitted multiplied by 100 to
/// avoid a fractional encoding and is divided back out here when positive.
///
/// Input that decodes to an odd byte count or to fewer than five fields is
/// rejected with a [`TieError::Codec`] error.
pub fn decode_aggregate(attrib: &str) -> Result<Vec<f64>> {
    let bytes = BASE64
        .decode(attrib)
        .map_err(|e| TieError::Codec(format!("invalid aggregate attribute: {e}")))?;

    if bytes.len() % 2 != 0 {
        return Err(TieError::Codec(format!(
            "aggregate attribute has odd byte count {}",
            bytes.len()
        )));
    }

    let mut values: Vec<f64> = bytes
        .chunks_exact(2)
        .map(|pair| f64::from(u16::from_le_bytes([pair[0], pair[1]])))
        .collect();

    if values.len() < AGGREGATE_FIELDS {
        return Err(TieError::Codec(format!(
            "aggregate attribute has {} fields, expected {AGGREGATE_FIELDS}",
            values.len()
        )));
    }

    if values[4] > 0.0 {
        values[4] /= 100.0;
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_version() {
        assert_eq!(decode_version("73183493944770750").unwrap(), [1, 4, 0, 190]);
    }

    #[test]
    fn test_version_string() {
        assert_eq!(version_string("73183493944770750").unwrap(), "1.4.0.190");
    }

    #[test]
    fn test_decode_version_bit_boundaries() {
        // major=255, minor=255, patch=65535, build=4294967295
        assert_eq!(
            decode_version(&u64::MAX.to_string()).unwrap(),
            [255, 255, 65535, 4294967295]
        );
        assert_eq!(decode_version("0").unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_decode_version_rejects_garbage() {
        assert!(decode_version("not-a-number").is_err());
        assert!(decode_version("").is_err());
        assert!(decode_version("-1").is_err());
    }

    #[test]
    fn test_decode_aggregate() {
        assert_eq!(
            decode_aggregate("AgBkADIAZABMHQ==").unwrap(),
            vec![2.0, 100.0, 50.0, 100.0, 75.0]
        );
    }

    #[test]
    fn test_decode_aggregate_average_not_scaled_when_zero() {
        // [1, 1, 1, 1, 0] with a zero average stays zero.
        let encoded = BASE64.encode([1u8, 0, 1, 0, 1, 0, 1, 0, 0, 0]);
        assert_eq!(
            decode_aggregate(&encoded).unwrap(),
            vec![1.0, 1.0, 1.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_decode_aggregate_rejects_short_input() {
        let encoded = BASE64.encode([2u8, 0, 100, 0]);
        assert!(decode_aggregate(&encoded).is_err());
    }

    #[test]
    fn test_decode_aggregate_rejects_odd_length() {
        let encoded = BASE64.encode([2u8, 0, 100, 0, 50, 0, 100, 0, 75]);
        assert!(decode_aggregate(&encoded).is_err());
    }

    #[test]
    fn test_decode_aggregate_rejects_bad_base64() {
        assert!(decode_aggregate("!!!not base64!!!").is_err());
    }
}
