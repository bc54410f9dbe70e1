//! TIE Core - Foundation crate for the TIE reputation client.
//!
//! This crate provides the shared types, constant catalogs, codec helpers
//! and error handling that the client crate builds on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`types`] - Domain types (`HashAlgorithm`, `ReputationRecord`, events)
//! - [`trust`] - Trust level constants (standard and ATD scales)
//! - [`provider`] - Reputation provider ids for files and certificates
//! - [`file_type`] - Trusted file-type classification codes
//! - [`attributes`] - Attribute id catalogs per provider
//! - [`codec`] - Decoders for packed version and aggregate attributes
//! - [`epoch`] - Epoch-seconds to local-time helpers
//!
//! # Example
//!
//! ```rust
//! use tie_core::{codec, trust};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert!(trust::is_standard_level(trust::KNOWN_TRUSTED));
//! assert_eq!(codec::version_string("73183493944770750")?, "1.4.0.190");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod attributes;
pub mod codec;
pub mod epoch;
pub mod error;
pub mod file_type;
pub mod provider;
pub mod trust;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TieError};
pub use types::{
    CertificateRelationship, DetectionEvent, FirstInstanceEvent, FirstReference, HashAlgorithm,
    HashDigests, Overridden, OverriddenFile, ReputationChangeEvent, ReputationMap,
    ReputationRecord,
};
