//! Integration tests for the Velocloud clients
//!
//! These tests require a reachable orchestrator.
//! Set VELOCLOUD_URL, VELOCLOUD_TOKEN and VELOCLOUD_ENTERPRISE (a logical id
//! for V2, a numeric id for V1) to run.

use velocloud_client::{LegacyId, VelocloudV1Client, VelocloudV2Client};

fn required_env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} environment variable must be set"))
}

#[tokio::test]
#[ignore] // Requires running orchestrator
async fn test_v2_get_enterprise_and_edges() {
    let client = VelocloudV2Client::new(required_env("VELOCLOUD_URL"), required_env("VELOCLOUD_TOKEN"))
        .expect("Failed to create client");
    let enterprise_id = required_env("VELOCLOUD_ENTERPRISE");

    let enterprise = client.get_enterprise(&enterprise_id).await
        .expect("Failed to get enterprise");
    println!("Enterprise: {:?}", enterprise.name);

    let edges = client.list_edges(&enterprise_id, true).await
        .expect("Failed to list edges");
    println!("Found {} edges", edges.len());
}

#[tokio::test]
#[ignore]
async fn test_v1_get_enterprise() {
    let client = VelocloudV1Client::new(required_env("VELOCLOUD_URL"), required_env("VELOCLOUD_TOKEN"))
        .expect("Failed to create client");
    let id = LegacyId::parse(&required_env("VELOCLOUD_ENTERPRISE")).expect("Invalid enterprise id");

    let enterprise = client.get_enterprise(&id).await
        .expect("Failed to get enterprise");
    assert!(enterprise.is_some(), "Enterprise {id} returned an empty result");
}
