//! Mist client against a local mock server

use mist_client::{DEFAULT_PAGE_LIMIT, MistClient, SouthboundError};
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORG: &str = "6748cfa6-4e12-11e6-9188-0242ac110007";

fn client(server: &MockServer) -> MistClient {
    MistClient::new(server.uri(), "mist-token".to_string()).unwrap()
}

fn sites(range: std::ops::Range<u32>) -> Value {
    Value::Array(
        range
            .map(|i| json!({"id": format!("site-{i}"), "org_id": ORG, "name": format!("Store {i}")}))
            .collect(),
    )
}

fn counters(total: u64, page: u64) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("X-Page-Total", total.to_string().as_str())
        .insert_header("X-Page-Limit", DEFAULT_PAGE_LIMIT.to_string().as_str())
        .insert_header("X-Page-Page", page.to_string().as_str())
}

#[tokio::test]
async fn test_sites_paged_until_total_reached() {
    let server = MockServer::start().await;
    let sites_path = format!("/api/v1/orgs/{ORG}/sites");
    Mock::given(method("GET"))
        .and(path(sites_path.as_str()))
        .and(query_param("page", "1"))
        .and(query_param("limit", "100"))
        .and(header("Authorization", "Token mist-token"))
        .respond_with(counters(150, 1).set_body_json(sites(0..100)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(sites_path.as_str()))
        .and(query_param("page", "2"))
        .respond_with(counters(150, 2).set_body_json(sites(100..150)))
        .expect(1)
        .mount(&server)
        .await;

    let found = client(&server).get_org_sites(ORG).await.unwrap();
    assert_eq!(found.len(), 150);
    assert_eq!(found[149].name, "Store 149");
}

#[tokio::test]
async fn test_server_ignoring_page_parameter_stops() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/orgs/{ORG}/sites").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(sites(0..100)))
        .expect(2)
        .mount(&server)
        .await;

    let found = client(&server).get_org_sites(ORG).await.unwrap();
    assert_eq!(found.len(), 100);
}

#[tokio::test]
async fn test_inventory_first_page_with_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/orgs/{ORG}/inventory").as_str()))
        .and(query_param("serial", "A0710190400D5"))
        .respond_with(counters(1, 1).set_body_json(json!([{
            "mac": "5c5b35000001",
            "serial": "A0710190400D5",
            "model": "AP43",
            "type": "ap",
            "site_id": "site-1",
            "connected": true
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let devices = client(&server)
        .get_org_inventory(ORG, &[("serial", "A0710190400D5")], false)
        .await
        .unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].site_id.as_deref(), Some("site-1"));
}

#[tokio::test]
async fn test_device_stats_request_all_types() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/sites/site-1/stats/devices"))
        .and(query_param("type", "all"))
        .and(query_param("mac", "5c5b35000001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "mac": "5c5b35000001",
            "version": "0.12.27139",
            "status": "connected"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let stats = client(&server)
        .get_site_device_stats("site-1", &[("mac", "5c5b35000001")])
        .await
        .unwrap();
    assert_eq!(stats[0].status.as_deref(), Some("connected"));
}

#[tokio::test]
async fn test_status_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/orgs/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/self"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Authentication credentials were not provided."})))
        .mount(&server)
        .await;

    let client = client(&server);
    assert!(client.get_org("missing").await.unwrap_err().is_not_found());
    assert!(matches!(
        client.get_self().await.unwrap_err(),
        SouthboundError::Authentication(_)
    ));
}
