//! Integration tests for the FortiManager client
//!
//! These tests require a reachable FortiManager.
//! Set FORTIMANAGER_URL and FORTIMANAGER_API_KEY to run.

use fortimanager_client::FortiManagerClient;

fn client() -> FortiManagerClient {
    let url = std::env::var("FORTIMANAGER_URL")
        .expect("FORTIMANAGER_URL environment variable must be set");
    let key = std::env::var("FORTIMANAGER_API_KEY")
        .expect("FORTIMANAGER_API_KEY environment variable must be set");
    FortiManagerClient::new(url, key).expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires FortiManager access
async fn test_system_status() {
    let status = client().get_system_status().await
        .expect("Failed to read system status");
    println!("FortiManager {:?} running {:?}", status.hostname, status.version);
}

#[tokio::test]
#[ignore]
async fn test_devices_per_adom() {
    let client = client();
    let adoms = client.get_adoms().await
        .expect("Failed to list ADOMs");

    for adom in adoms.iter().take(3) {
        let devices = client.get_devices(&adom.name).await
            .expect("Failed to list devices");
        println!("ADOM {} manages {} devices", adom.name, devices.len());
    }
}
