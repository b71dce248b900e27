//! Integration tests for the Mist client
//!
//! These tests require Mist cloud access.
//! Set MIST_TOKEN (and optionally MIST_URL) to run.

use mist_client::{DEFAULT_BASE_URL, MistClient};

fn client() -> MistClient {
    let url = std::env::var("MIST_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let token = std::env::var("MIST_TOKEN")
        .expect("MIST_TOKEN environment variable must be set");
    MistClient::new(url, token).expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires Mist cloud access
async fn test_self() {
    let me = client().get_self().await
        .expect("Failed to read token identity");
    println!("Token has {} privileges", me.privileges.len());
}

#[tokio::test]
#[ignore]
async fn test_inventory_all_pages() {
    let client = client();
    let me = client.get_self().await
        .expect("Failed to read token identity");

    if let Some(org_id) = me.org_ids().next() {
        let inventory = client.get_org_inventory(org_id, &[], true).await
            .expect("Failed to query inventory");
        println!("Org {} has {} claimed devices", org_id, inventory.len());
    }
}
