//! Central error types for TIE client operations.
//!
//! Every fallible operation in the workspace reports through [`TieError`].
//! Validation errors are raised before any fabric interaction; transport
//! errors come from the fabric implementation unchanged; payload errors
//! cover malformed response and event bodies.

use thiserror::Error;

/// Central error type for all TIE operations.
#[derive(Error, Debug)]
pub enum TieError {
    /// Input rejected before any fabric interaction (empty hash set,
    /// unknown trust level or file type).
    #[error("validation error: {0}")]
    Validation(String),

    /// A packed attribute value could not be decoded (bad base64, bad hex,
    /// malformed version or aggregate encoding).
    #[error("codec error: {0}")]
    Codec(String),

    /// The underlying messaging fabric reported a failure. The message is
    /// forwarded unchanged; no retry is attempted at this layer.
    #[error("transport error: {0}")]
    Transport(String),

    /// A response or event body was not valid JSON or did not have the
    /// expected shape. The whole operation fails; there are no partial
    /// results.
    #[error("payload error: {0}")]
    Payload(String),
}

/// Result type alias using [`TieError`].
pub type Result<T> = std::result::Result<T, TieError>;
