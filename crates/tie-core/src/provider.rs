//! Reputation provider ids.
//!
//! Provider ids are distinct between file and certificate reputations:
//! the same organization reports under different ids for each subject kind.

/// Providers of file reputations.
pub mod file {
    /// Global Threat Intelligence (GTI).
    pub const GTI: i64 = 1;
    /// Enterprise reputation (specific to the local enterprise).
    pub const ENTERPRISE: i64 = 3;
    /// Advanced Threat Defense (ATD).
    pub const ATD: i64 = 5;
    /// Web Gateway (MWG).
    pub const MWG: i64 = 7;
    /// External provider reputation (reported via the external report event).
    pub const EXTERNAL: i64 = 11;
}

/// Providers of certificate reputations.
pub mod certificate {
    /// Global Threat Intelligence (GTI).
    pub const GTI: i64 = 2;
    /// Enterprise reputation (specific to the local enterprise).
    pub const ENTERPRISE: i64 = 4;
}
