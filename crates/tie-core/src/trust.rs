//! Trust level constants.
//!
//! The standard levels apply to both files and certificates. Providers may
//! also report provider-specific scales; the Advanced Threat Defense (ATD)
//! scale is in [`atd`].

/// It is a trusted installer.
pub const KNOWN_TRUSTED_INSTALLER: i64 = 100;
/// It is a trusted file or certificate.
pub const KNOWN_TRUSTED: i64 = 99;
/// It is almost certain that the file or certificate is trusted.
pub const MOST_LIKELY_TRUSTED: i64 = 85;
/// It seems to be a benign file or certificate.
pub const MIGHT_BE_TRUSTED: i64 = 70;
/// The provider has encountered the file or certificate before but cannot
/// determine its reputation at the moment.
pub const UNKNOWN: i64 = 50;
/// It seems to be a suspicious file or certificate.
pub const MIGHT_BE_MALICIOUS: i64 = 30;
/// It is almost certain that the file or certificate is malicious.
pub const MOST_LIKELY_MALICIOUS: i64 = 15;
/// It is a malicious file or certificate.
pub const KNOWN_MALICIOUS: i64 = 1;
/// The file or certificate's reputation hasn't been determined yet.
pub const NOT_SET: i64 = 0;

/// All standard trust levels, highest first.
pub const STANDARD_LEVELS: [i64; 9] = [
    KNOWN_TRUSTED_INSTALLER,
    KNOWN_TRUSTED,
    MOST_LIKELY_TRUSTED,
    MIGHT_BE_TRUSTED,
    UNKNOWN,
    MIGHT_BE_MALICIOUS,
    MOST_LIKELY_MALICIOUS,
    KNOWN_MALICIOUS,
    NOT_SET,
];

/// Whether `level` is one of the standard trust levels.
#[must_use]
pub fn is_standard_level(level: i64) -> bool {
    STANDARD_LEVELS.contains(&level)
}

/// Trust levels on the Advanced Threat Defense (ATD) scale.
///
/// ATD reports on its own scale, where lower is more trusted.
pub mod atd {
    /// It is a trusted file or certificate.
    pub const KNOWN_TRUSTED: i64 = -1;
    /// It is almost certain that the file or certificate is trusted.
    pub const MOST_LIKELY_TRUSTED: i64 = 0;
    /// It seems to be a benign file or certificate.
    pub const MIGHT_BE_TRUSTED: i64 = 1;
    /// The provider can't determine a reputation at the moment.
    pub const UNKNOWN: i64 = 2;
    /// It seems to be a suspicious file or certificate.
    pub const MIGHT_BE_MALICIOUS: i64 = 3;
    /// It is almost certain that the file or certificate is malicious.
    pub const MOST_LIKELY_MALICIOUS: i64 = 4;
    /// It is a malicious file or certificate.
    pub const KNOWN_MALICIOUS: i64 = 5;
    /// The file or certificate's reputation hasn't been determined yet.
    pub const NOT_SET: i64 = -2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_level_membership() {
        assert!(is_standard_level(KNOWN_TRUSTED));
        assert!(is_standard_level(NOT_SET));
        assert!(!is_standard_level(42));
        assert!(!is_standard_level(-1));
    }
}
