//! The TIE client orchestrator.
//!
//! [`TieClient`] issues reputation lookups and updates over a caller-supplied
//! [`Fabric`] and manages event subscriptions. Every operation is stateless
//! and independent: payloads are built per call, nothing is cached, and no
//! retries happen at this layer.

use crate::config::ClientConfig;
use crate::fabric::{EventHandler, Fabric, FabricEvent};
use crate::{topics, transform};
use serde_json::{json, Map, Value};
use std::sync::{Arc, Mutex};
use tie_core::{
    file_type, provider, trust, DetectionEvent, FirstInstanceEvent, FirstReference, HashAlgorithm,
    HashDigests, ReputationChangeEvent, ReputationMap, Result, TieError,
};
use tracing::debug;

/// Callback invoked with a normalized file detection and the raw event.
pub type DetectionCallback = Arc<dyn Fn(DetectionEvent, FabricEvent) + Send + Sync>;

/// Callback invoked with a normalized first-instance event and the raw event.
pub type FirstInstanceCallback = Arc<dyn Fn(FirstInstanceEvent, FabricEvent) + Send + Sync>;

/// Callback invoked with a normalized reputation change and the raw event.
pub type ReputationChangeCallback = Arc<dyn Fn(ReputationChangeEvent, FabricEvent) + Send + Sync>;

/// An active event subscription.
struct Registration {
    topic: &'static str,
    /// Pointer identity of the caller's callback, used for deregistration.
    key: usize,
    handler: EventHandler,
}

fn callback_key<T: ?Sized>(callback: &Arc<T>) -> usize {
    Arc::as_ptr(callback).cast::<()>() as usize
}

fn to_json_bytes(body: &Value) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(|e| TieError::Payload(format!("encoding request body: {e}")))
}

fn require_hashes(hashes: &HashDigests) -> Result<()> {
    if hashes.is_empty() {
        return Err(TieError::Validation(
            "at least one hash is required".to_string(),
        ));
    }
    Ok(())
}

/// Client for the TIE reputation service.
///
/// The client holds a reference to the messaging fabric rather than owning
/// a connection; connection lifecycle and timeouts belong to the caller's
/// [`Fabric`] implementation.
pub struct TieClient {
    fabric: Arc<dyn Fabric>,
    config: ClientConfig,
    registrations: Mutex<Vec<Registration>>,
}

impl TieClient {
    /// Create a client over `fabric` with the default configuration.
    #[must_use]
    pub fn new(fabric: Arc<dyn Fabric>) -> Self {
        Self {
            fabric,
            config: ClientConfig::default(),
            registrations: Mutex::new(Vec::new()),
        }
    }

    /// Replace the client configuration.
    #[must_use]
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Retrieve the reputations of a file, keyed by provider id.
    ///
    /// An empty result map means no provider had a reputation for the file.
    pub async fn get_file_reputation(&self, hashes: &HashDigests) -> Result<ReputationMap> {
        self.get_reputation(topics::GET_FILE_REPUTATION, hashes, Map::new())
            .await
    }

    /// Set the enterprise reputation of a file.
    ///
    /// `trust_level` may be any numeric level the enterprise chooses;
    /// `filename` and `comment` are informational.
    pub async fn set_file_reputation(
        &self,
        trust_level: i64,
        hashes: &HashDigests,
        filename: &str,
        comment: &str,
    ) -> Result<()> {
        let mut extra = Map::new();
        extra.insert("filename".to_string(), Value::from(filename));
        self.set_reputation(
            topics::SET_FILE_REPUTATION,
            trust_level,
            provider::file::ENTERPRISE,
            hashes,
            extra,
            comment,
        )
        .await
    }

    /// Retrieve the systems that have referenced a file, earliest first
    /// as reported by the service.
    ///
    /// `query_limit` caps the result; `None` uses the configured default.
    pub async fn get_file_first_references(
        &self,
        hashes: &HashDigests,
        query_limit: Option<u32>,
    ) -> Result<Vec<FirstReference>> {
        self.get_first_references(topics::GET_FILE_FIRST_REFS, hashes, Map::new(), query_limit)
            .await
    }

    /// Retrieve the reputations of a certificate, keyed by provider id.
    ///
    /// `sha1` is the certificate's SHA-1 as hex; `public_key_sha1`, when
    /// known, is the SHA-1 of the certificate's public key as hex.
    pub async fn get_certificate_reputation(
        &self,
        sha1: &str,
        public_key_sha1: Option<&str>,
    ) -> Result<ReputationMap> {
        let extra = Self::public_key_payload(public_key_sha1)?;
        let hashes = Self::cert_hashes(sha1);
        self.get_reputation(topics::GET_CERT_REPUTATION, &hashes, extra)
            .await
    }

    /// Set the enterprise reputation of a certificate.
    pub async fn set_certificate_reputation(
        &self,
        trust_level: i64,
        sha1: &str,
        public_key_sha1: Option<&str>,
        comment: &str,
    ) -> Result<()> {
        let extra = Self::public_key_payload(public_key_sha1)?;
        let hashes = Self::cert_hashes(sha1);
        self.set_reputation(
            topics::SET_CERT_REPUTATION,
            trust_level,
            provider::certificate::ENTERPRISE,
            &hashes,
            extra,
            comment,
        )
        .await
    }

    /// Retrieve the systems that have referenced a certificate.
    pub async fn get_certificate_first_references(
        &self,
        sha1: &str,
        public_key_sha1: Option<&str>,
        query_limit: Option<u32>,
    ) -> Result<Vec<FirstReference>> {
        let extra = Self::public_key_payload(public_key_sha1)?;
        let hashes = Self::cert_hashes(sha1);
        self.get_first_references(topics::GET_CERT_FIRST_REFS, &hashes, extra, query_limit)
            .await
    }

    /// Report a file reputation on behalf of an external provider.
    ///
    /// This publishes a fire-and-forget event; the service does not
    /// acknowledge it. `trust_level` must be one of the standard trust
    /// levels and `file_type` one of the known file type codes; both are
    /// checked before anything is published.
    pub async fn set_external_file_reputation(
        &self,
        trust_level: i64,
        file_type: u64,
        hashes: &HashDigests,
        filename: &str,
        comment: &str,
    ) -> Result<()> {
        if !trust::is_standard_level(trust_level) {
            return Err(TieError::Validation(format!(
                "trust level {trust_level} is not a standard trust level"
            )));
        }
        if !file_type::is_known(file_type) {
            return Err(TieError::Validation(format!(
                "file type {file_type} is not a known file type"
            )));
        }
        require_hashes(hashes)?;

        let body = json!({
            "file": {
                "type": file_type,
                "hashes": transform::hashes_to_wire(hashes)?,
                "attributes": {"filename": filename},
                "reputation": {"score": trust_level},
            },
            "provider": {"id": provider::file::EXTERNAL},
            "comment": comment,
        });

        debug!(topic = topics::EVENT_EXTERNAL_FILE_REPORT, "publishing external file report");
        self.fabric
            .send_event(topics::EVENT_EXTERNAL_FILE_REPORT, to_json_bytes(&body)?)
            .await
    }

    /// Register a callback for file detection events.
    pub async fn add_file_detection_callback(&self, callback: DetectionCallback) -> Result<()> {
        self.register(
            topics::EVENT_FILE_DETECTION,
            transform::parse_detection,
            callback,
        )
        .await
    }

    /// Deregister a file detection callback.
    ///
    /// The callback is matched by `Arc` identity: pass a clone of the value
    /// given to [`Self::add_file_detection_callback`]. Unknown callbacks
    /// are a silent no-op.
    pub async fn remove_file_detection_callback(&self, callback: &DetectionCallback) -> Result<()> {
        self.deregister(topics::EVENT_FILE_DETECTION, callback).await
    }

    /// Register a callback for file first-instance events.
    pub async fn add_file_first_instance_callback(
        &self,
        callback: FirstInstanceCallback,
    ) -> Result<()> {
        self.register(
            topics::EVENT_FILE_FIRST_INSTANCE,
            transform::parse_first_instance,
            callback,
        )
        .await
    }

    /// Deregister a file first-instance callback.
    pub async fn remove_file_first_instance_callback(
        &self,
        callback: &FirstInstanceCallback,
    ) -> Result<()> {
        self.deregister(topics::EVENT_FILE_FIRST_INSTANCE, callback)
            .await
    }

    /// Register a callback for broadcast file reputation changes.
    pub async fn add_file_reputation_change_callback(
        &self,
        callback: ReputationChangeCallback,
    ) -> Result<()> {
        self.register(
            topics::EVENT_FILE_REPUTATION_CHANGE,
            transform::parse_reputation_change,
            callback,
        )
        .await
    }

    /// Deregister a file reputation change callback.
    pub async fn remove_file_reputation_change_callback(
        &self,
        callback: &ReputationChangeCallback,
    ) -> Result<()> {
        self.deregister(topics::EVENT_FILE_REPUTATION_CHANGE, callback)
            .await
    }

    /// Register a callback for broadcast certificate reputation changes.
    pub async fn add_certificate_reputation_change_callback(
        &self,
        callback: ReputationChangeCallback,
    ) -> Result<()> {
        self.register(
            topics::EVENT_CERT_REPUTATION_CHANGE,
            transform::parse_reputation_change,
            callback,
        )
        .await
    }

    /// Deregister a certificate reputation change callback.
    pub async fn remove_certificate_reputation_change_callback(
        &self,
        callback: &ReputationChangeCallback,
    ) -> Result<()> {
        self.deregister(topics::EVENT_CERT_REPUTATION_CHANGE, callback)
            .await
    }

    fn cert_hashes(sha1: &str) -> HashDigests {
        let mut hashes = HashDigests::new();
        hashes.insert(HashAlgorithm::Sha1, sha1.to_string());
        hashes
    }

    fn public_key_payload(public_key_sha1: Option<&str>) -> Result<Map<String, Value>> {
        let mut extra = Map::new();
        if let Some(public_key_sha1) = public_key_sha1 {
            extra.insert(
                "publicKeySha1".to_string(),
                Value::from(transform::hex_to_base64(public_key_sha1)?),
            );
        }
        Ok(extra)
    }

    fn request_body(
        mut extra: Map<String, Value>,
        hashes: &HashDigests,
    ) -> Result<Vec<u8>> {
        let wire = transform::hashes_to_wire(hashes)?;
        extra.insert(
            "hashes".to_string(),
            serde_json::to_value(wire)
                .map_err(|e| TieError::Payload(format!("encoding hashes: {e}")))?,
        );
        to_json_bytes(&Value::Object(extra))
    }

    async fn get_reputation(
        &self,
        topic: &'static str,
        hashes: &HashDigests,
        extra: Map<String, Value>,
    ) -> Result<ReputationMap> {
        require_hashes(hashes)?;
        let body = Self::request_body(extra, hashes)?;
        debug!(topic, "requesting reputations");
        let response = self.fabric.send_request(topic, body).await?;
        transform::parse_reputation_response(&response)
    }

    async fn set_reputation(
        &self,
        topic: &'static str,
        trust_level: i64,
        provider_id: i64,
        hashes: &HashDigests,
        mut extra: Map<String, Value>,
        comment: &str,
    ) -> Result<()> {
        require_hashes(hashes)?;
        extra.insert("trustLevel".to_string(), Value::from(trust_level));
        extra.insert("providerId".to_string(), Value::from(provider_id));
        extra.insert("comment".to_string(), Value::from(comment));
        let body = Self::request_body(extra, hashes)?;
        debug!(topic, trust_level, provider_id, "setting reputation");
        // The service responds with an empty body; only failure matters.
        self.fabric.send_request(topic, body).await?;
        Ok(())
    }

    async fn get_first_references(
        &self,
        topic: &'static str,
        hashes: &HashDigests,
        mut extra: Map<String, Value>,
        query_limit: Option<u32>,
    ) -> Result<Vec<FirstReference>> {
        require_hashes(hashes)?;
        let limit = query_limit.unwrap_or(self.config.first_references_query_limit);
        extra.insert("queryLimit".to_string(), Value::from(limit));
        let body = Self::request_body(extra, hashes)?;
        debug!(topic, limit, "requesting first references");
        let response = self.fabric.send_request(topic, body).await?;
        transform::parse_first_references(&response)
    }

    async fn register<T: 'static>(
        &self,
        topic: &'static str,
        decode: fn(&[u8]) -> Result<T>,
        callback: Arc<dyn Fn(T, FabricEvent) + Send + Sync>,
    ) -> Result<()> {
        let key = callback_key(&callback);
        let handler: EventHandler = Arc::new(move |event: FabricEvent| {
            match decode(&event.payload) {
                Ok(payload) => callback(payload, event),
                Err(err) => {
                    tracing::warn!(topic = %event.topic, error = %err, "dropping event with malformed payload");
                }
            }
        });

        self.fabric
            .add_event_handler(topic, Arc::clone(&handler))
            .await?;

        self.registrations
            .lock()
            .expect("acquire registration lock")
            .push(Registration { topic, key, handler });

        debug!(topic, "registered event callback");
        Ok(())
    }

    async fn deregister<T: 'static>(
        &self,
        topic: &'static str,
        callback: &Arc<dyn Fn(T, FabricEvent) + Send + Sync>,
    ) -> Result<()> {
        let key = callback_key(callback);
        let registration = {
            let mut registrations = self
                .registrations
                .lock()
                .expect("acquire registration lock");
            registrations
                .iter()
                .position(|r| r.topic == topic && r.key == key)
                .map(|index| registrations.remove(index))
        };

        match registration {
            Some(registration) => {
                self.fabric
                    .remove_event_handler(topic, &registration.handler)
                    .await?;
                debug!(topic, "deregistered event callback");
                Ok(())
            }
            // Unknown callback; nothing was registered under this identity.
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_key_identity() {
        let a: DetectionCallback = Arc::new(|_, _| {});
        let b: DetectionCallback = Arc::new(|_, _| {});
        assert_eq!(callback_key(&a), callback_key(&Arc::clone(&a)));
        assert_ne!(callback_key(&a), callback_key(&b));
    }

    #[test]
    fn test_require_hashes() {
        assert!(require_hashes(&HashDigests::new()).is_err());
        let mut hashes = HashDigests::new();
        hashes.insert(HashAlgorithm::Md5, "00".to_string());
        assert!(require_hashes(&hashes).is_ok());
    }
}
