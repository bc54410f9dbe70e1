//! Example: Subscribe to file reputation change broadcasts.
//!
//! Uses an in-memory loopback fabric that redelivers published events to
//! registered handlers, then injects one synthetic change broadcast.

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tie_client::{EventHandler, Fabric, FabricEvent, ReputationChangeCallback, TieClient};
use tie_core::Result;

/// Loopback fabric: events published on a topic are delivered to every
/// handler registered on that topic.
#[derive(Default)]
struct LoopbackFabric {
    handlers: Mutex<Vec<(String, EventHandler)>>,
}

#[async_trait]
impl Fabric for LoopbackFabric {
    async fn send_request(&self, _topic: &str, _payload: Vec<u8>) -> Result<Vec<u8>> {
        Ok(b"{}".to_vec())
    }

    async fn send_event(&self, topic: &str, payload: Vec<u8>) -> Result<()> {
        let handlers: Vec<EventHandler> = self
            .handlers
            .lock()
            .expect("acquire handler lock")
            .iter()
            .filter(|(t, _)| t == topic)
            .map(|(_, h)| Arc::clone(h))
            .collect();
        for handler in handlers {
            handler(FabricEvent {
                topic: topic.to_string(),
                payload: payload.clone(),
            });
        }
        Ok(())
    }

    async fn add_event_handler(&self, topic: &str, handler: EventHandler) -> Result<()> {
        self.handlers
            .lock()
            .expect("acquire handler lock")
            .push((topic.to_string(), handler));
        Ok(())
    }

    async fn remove_event_handler(&self, topic: &str, handler: &EventHandler) -> Result<()> {
        self.handlers
            .lock()
            .expect("acquire handler lock")
            .retain(|(t, h)| !(t == topic && Arc::ptr_eq(h, handler)));
        Ok(())
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let fabric = Arc::new(LoopbackFabric::default());
    let client = TieClient::new(fabric.clone());

    let callback: ReputationChangeCallback = Arc::new(|change, raw| {
        println!("Reputation change on {}", raw.topic);
        println!("  Hashes: {:?}", change.hashes);
        println!("  Update time: {}", change.update_time);
        for (provider_id, record) in &change.new_reputations {
            println!(
                "  Provider {provider_id}: {} (was {})",
                record.trust_level,
                change
                    .old_reputations
                    .get(provider_id)
                    .map_or(0, |old| old.trust_level)
            );
        }
    });

    client
        .add_file_reputation_change_callback(Arc::clone(&callback))
        .await?;
    println!("Waiting for reputation change events...\n");

    // Inject a synthetic broadcast; with a real fabric this would come
    // from the service.
    let change = json!({
        "hashes": [{"type": "md5", "value": "8se7isyX+S6Yei1Ah9AhsQ=="}],
        "newReputations": {"reputations": [{"providerId": 3, "trustLevel": 85}]},
        "oldReputations": {"reputations": [{"providerId": 3, "trustLevel": 50}]},
        "updateTime": 1481301038
    });
    fabric
        .send_event(
            tie_client::topics::EVENT_FILE_REPUTATION_CHANGE,
            change.to_string().into_bytes(),
        )
        .await?;

    client
        .remove_file_reputation_change_callback(&callback)
        .await?;

    Ok(())
}
