//! Client configuration with documented defaults.

use serde::{Deserialize, Serialize};

/// Default cap on the number of systems returned by first-reference lookups.
pub const DEFAULT_QUERY_LIMIT: u32 = 500;

/// Configuration for a [`crate::TieClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Maximum number of first references returned by a lookup when the
    /// caller does not pass an explicit limit.
    pub first_references_query_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            first_references_query_limit: DEFAULT_QUERY_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default first-reference query limit.
    #[must_use]
    pub fn with_first_references_query_limit(mut self, limit: u32) -> Self {
        self.first_references_query_limit = limit;
        self
    }
}
