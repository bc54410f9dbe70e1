//! TIE Client - reputation lookups and updates over a messaging fabric.
//!
//! This crate translates between the reputation service's wire format and
//! the caller-facing types in `tie-core`, and orchestrates requests, event
//! publishes and event subscriptions over a caller-supplied fabric.
//!
//! # Architecture
//!
//! - **Fabric** ([`fabric`]): the minimal messaging capability the client
//!   needs (request/response, publish, subscribe); connection lifecycle
//!   stays with the implementation
//! - **Topics** ([`topics`]): the fixed topic catalog of the service
//! - **Transforms** ([`transform`]): wire-format conversion and
//!   normalization
//! - **Client** ([`client`]): the `TieClient` operations
//! - **Config** ([`config`]): defaults such as the first-reference query
//!   limit
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tie_client::{Fabric, TieClient};
//! use tie_core::{HashAlgorithm, HashDigests};
//!
//! # async fn run(fabric: Arc<dyn Fabric>) -> Result<(), Box<dyn std::error::Error>> {
//! let client = TieClient::new(fabric);
//!
//! let mut hashes = HashDigests::new();
//! hashes.insert(
//!     HashAlgorithm::Md5,
//!     "f2c7bb8acc97f92e987a2d4087d021b1".to_string(),
//! );
//!
//! let reputations = client.get_file_reputation(&hashes).await?;
//! for (provider_id, record) in &reputations {
//!     println!("provider {provider_id}: trust level {}", record.trust_level);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod config;
pub mod fabric;
pub mod topics;
pub mod transform;

// Re-export commonly used types
pub use client::{DetectionCallback, FirstInstanceCallback, ReputationChangeCallback, TieClient};
pub use config::ClientConfig;
pub use fabric::{EventHandler, Fabric, FabricEvent};
pub use tie_core::{Result, TieError};
