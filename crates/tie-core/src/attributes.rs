//! Attribute id catalogs.
//!
//! Reputation records carry provider-specific attributes in a dictionary
//! keyed by decimal-string attribute id. The ids here are the only source
//! of truth for what those keys mean; they stay strings end to end and are
//! never coerced to integers.
//!
//! Several attribute values are packed encodings. Use
//! [`crate::codec::decode_version`] for the enterprise
//! [`enterprise::SERVER_VERSION`] value and
//! [`crate::codec::decode_aggregate`] for the file-enterprise
//! [`file_enterprise::PARENT_FILE_REPS`] / [`file_enterprise::CHILD_FILE_REPS`]
//! values. Epoch-second attributes (first contact, last detection) can be
//! rendered with [`crate::epoch`].

/// Attributes reported by the enterprise provider for files and certificates.
pub mod enterprise {
    /// Version of the reputation server, packed into a 64-bit value.
    pub const SERVER_VERSION: &str = "2139285";
}

/// Attributes reported by the enterprise provider for files.
pub mod file_enterprise {
    /// Count of systems within the enterprise that have the file.
    pub const PREVALENCE: &str = "2101652";
    /// Time the file was first seen within the enterprise (epoch seconds).
    pub const FIRST_CONTACT: &str = "2102165";
    /// Count of systems within the enterprise.
    pub const ENTERPRISE_SIZE: &str = "2111893";
    /// Lowest local reputation assigned to the file.
    pub const MIN_LOCAL_REP: &str = "2112148";
    /// Highest local reputation assigned to the file.
    pub const MAX_LOCAL_REP: &str = "2112404";
    /// Average local reputation assigned to the file.
    pub const AVG_LOCAL_REP: &str = "2112660";
    /// Lowest local reputation among the file's parents.
    pub const PARENT_MIN_LOCAL_REP: &str = "2112916";
    /// Highest local reputation among the file's parents.
    pub const PARENT_MAX_LOCAL_REP: &str = "2113172";
    /// Average local reputation among the file's parents.
    pub const PARENT_AVG_LOCAL_REP: &str = "2113428";
    /// Count of detections for the file.
    pub const DETECTION_COUNT: &str = "2113685";
    /// Time of the last detection (epoch seconds).
    pub const LAST_DETECTION_TIME: &str = "2113942";
    /// Count of distinct names the file has been seen under.
    pub const FILE_NAME_COUNT: &str = "2114965";
    /// Whether the file is considered prevalent within the enterprise.
    pub const IS_PREVALENT: &str = "2123156";
    /// Aggregate reputation statistics over the file's parents
    /// (packed, see [`crate::codec::decode_aggregate`]).
    pub const PARENT_FILE_REPS: &str = "2138264";
    /// Aggregate reputation statistics over the file's children
    /// (packed, see [`crate::codec::decode_aggregate`]).
    pub const CHILD_FILE_REPS: &str = "2138520";
    /// Version of the reputation server, packed into a 64-bit value.
    pub const SERVER_VERSION: &str = super::enterprise::SERVER_VERSION;
}

/// Attributes reported by the enterprise provider for certificates.
pub mod cert_enterprise {
    /// Time the certificate was first seen within the enterprise
    /// (epoch seconds).
    pub const FIRST_CONTACT: &str = "2109589";
    /// Count of systems within the enterprise that have the certificate.
    pub const PREVALENCE: &str = "2109333";
    /// Whether the certificate overrides reputations of individual files.
    pub const HAS_FILE_OVERRIDES: &str = "2122901";
    /// Whether the certificate is considered prevalent within the enterprise.
    pub const IS_PREVALENT: &str = "2125972";
    /// Version of the reputation server, packed into a 64-bit value.
    pub const SERVER_VERSION: &str = super::enterprise::SERVER_VERSION;
}

/// Attributes reported by the Global Threat Intelligence (GTI) provider.
pub mod gti {
    /// The raw response received from GTI.
    pub const ORIGINAL_RESPONSE: &str = "2120340";
}

/// GTI attributes specific to files.
pub mod file_gti {
    /// Time the file was first seen by GTI (epoch seconds).
    pub const FIRST_CONTACT: &str = "2101908";
    /// Count of times the file has been requested from GTI.
    pub const PREVALENCE: &str = "2102421";
    /// The raw response received from GTI.
    pub const ORIGINAL_RESPONSE: &str = super::gti::ORIGINAL_RESPONSE;
}

/// GTI attributes specific to certificates.
pub mod cert_gti {
    /// Count of times the certificate has been requested from GTI.
    pub const PREVALENCE: &str = "2108821";
    /// Time the certificate was first seen by GTI (epoch seconds).
    pub const FIRST_CONTACT: &str = "2109077";
    /// Whether the certificate has been revoked.
    pub const REVOKED: &str = "2117524";
    /// The raw response received from GTI.
    pub const ORIGINAL_RESPONSE: &str = super::gti::ORIGINAL_RESPONSE;
}

/// Attributes reported by the Advanced Threat Defense (ATD) provider.
pub mod atd {
    /// Trust score reported by the Gateway Anti-Malware engine
    /// (ATD scale, see [`crate::trust::atd`]).
    pub const GAM_SCORE: &str = "4194962";
    /// Trust score reported by the anti-virus engine (ATD scale).
    pub const AV_ENGINE_SCORE: &str = "4195218";
    /// Trust score from dynamic sandbox analysis (ATD scale).
    pub const SANDBOX_SCORE: &str = "4195474";
    /// Overall verdict (ATD scale).
    pub const VERDICT: &str = "4195730";
    /// Observed behaviors, encoded.
    pub const BEHAVIORS: &str = "4197784";
}
