//! Example: Look up file reputations and render the well-known attributes.
//!
//! Runs against an in-memory fabric that replays a canned service response,
//! so it works without a live broker. Swap `DemoFabric` for a real fabric
//! implementation to run against a service.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tie_client::{EventHandler, Fabric, TieClient};
use tie_core::{attributes, codec, epoch, provider, HashAlgorithm, HashDigests, Result};

/// Fabric stub that answers every request with one canned reputation body.
struct DemoFabric;

#[async_trait]
impl Fabric for DemoFabric {
    async fn send_request(&self, _topic: &str, _payload: Vec<u8>) -> Result<Vec<u8>> {
        let body = json!({
            "reputations": [
                {
                    "providerId": 1,
                    "trustLevel": 99,
                    "createDate": 1451502875,
                    "attributes": {
                        (attributes::file_gti::FIRST_CONTACT): "1451502875",
                        (attributes::file_gti::PREVALENCE): "4321"
                    }
                },
                {
                    "providerId": 3,
                    "trustLevel": 99,
                    "createDate": 1451502875,
                    "attributes": {
                        (attributes::file_enterprise::FIRST_CONTACT): "1451502875",
                        (attributes::file_enterprise::PREVALENCE): "235",
                        (attributes::enterprise::SERVER_VERSION): "73183493944770750",
                        (attributes::file_enterprise::CHILD_FILE_REPS): "AgBkADIAZABMHQ=="
                    }
                }
            ]
        });
        Ok(body.to_string().into_bytes())
    }

    async fn send_event(&self, _topic: &str, _payload: Vec<u8>) -> Result<()> {
        Ok(())
    }

    async fn add_event_handler(&self, _topic: &str, _handler: EventHandler) -> Result<()> {
        Ok(())
    }

    async fn remove_event_handler(&self, _topic: &str, _handler: &EventHandler) -> Result<()> {
        Ok(())
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = TieClient::new(Arc::new(DemoFabric));

    // Hashes for notepad.exe.
    let mut hashes = HashDigests::new();
    hashes.insert(
        HashAlgorithm::Md5,
        "f2c7bb8acc97f92e987a2d4087d021b1".to_string(),
    );
    hashes.insert(
        HashAlgorithm::Sha1,
        "7eb0139d2175739b3ccb0d1110067820be6abd29".to_string(),
    );

    let reputations = client.get_file_reputation(&hashes).await?;
    println!("Got {} reputations\n", reputations.len());

    for (provider_id, record) in &reputations {
        println!("Provider {provider_id}: trust level {}", record.trust_level);
        println!("  Created: {}", epoch::to_local_time_string(record.create_date)?);

        if *provider_id == provider::file::ENTERPRISE {
            if let Some(version) = record.attributes.get(attributes::enterprise::SERVER_VERSION) {
                println!("  Server version: {}", codec::version_string(version)?);
            }
            if let Some(prevalence) = record.attributes.get(attributes::file_enterprise::PREVALENCE)
            {
                println!("  Enterprise prevalence: {prevalence}");
            }
            if let Some(aggregate) = record
                .attributes
                .get(attributes::file_enterprise::CHILD_FILE_REPS)
            {
                let stats = codec::decode_aggregate(aggregate)?;
                println!(
                    "  Child files: count {}, max {}, min {}, last {}, average {}",
                    stats[0], stats[1], stats[2], stats[3], stats[4]
                );
            }
        }

        if *provider_id == provider::file::GTI {
            if let Some(first_contact) = record.attributes.get(attributes::file_gti::FIRST_CONTACT)
            {
                let epoch_seconds: i64 = first_contact.parse()?;
                println!(
                    "  GTI first contact: {}",
                    epoch::to_local_time_string(epoch_seconds)?
                );
            }
        }

        println!();
    }

    Ok(())
}
