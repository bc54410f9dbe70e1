//! Messaging fabric abstraction.
//!
//! The client does not own a connection. It holds a [`Fabric`]
//! implementation supplied by the caller and issues requests, publishes
//! events and registers event handlers through it. Connection lifecycle,
//! authentication, request/response correlation, timeouts and delivery
//! guarantees all belong to the implementation behind this trait.

use async_trait::async_trait;
use std::sync::Arc;
use tie_core::Result;

/// A raw event delivered by the fabric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FabricEvent {
    /// Topic the event was published on.
    pub topic: String,

    /// Raw message body (JSON bytes).
    pub payload: Vec<u8>,
}

/// Handler invoked for each event delivered on a subscribed topic.
///
/// Handlers are compared by `Arc` pointer identity when deregistering.
pub type EventHandler = Arc<dyn Fn(FabricEvent) + Send + Sync>;

/// Capabilities the client needs from the messaging fabric.
///
/// Implementations must be thread-safe; event handlers may be invoked
/// concurrently with in-flight requests and with each other.
#[async_trait]
pub trait Fabric: Send + Sync {
    /// Send a request to `topic` and wait for the single response body.
    async fn send_request(&self, topic: &str, payload: Vec<u8>) -> Result<Vec<u8>>;

    /// Publish a fire-and-forget event to `topic`.
    async fn send_event(&self, topic: &str, payload: Vec<u8>) -> Result<()>;

    /// Register `handler` for events on `topic`.
    async fn add_event_handler(&self, topic: &str, handler: EventHandler) -> Result<()>;

    /// Deregister `handler` from `topic`, matching by pointer identity.
    ///
    /// Unknown handlers are a silent no-op.
    async fn remove_event_handler(&self, topic: &str, handler: &EventHandler) -> Result<()>;
}
