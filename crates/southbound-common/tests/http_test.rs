//! HTTP behaviour of the shared client against a local mock server

use serde::Deserialize;
use serde_json::json;
use southbound_common::{AuthScheme, ClientConfig, HttpClient, SouthboundError};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Item {
    id: u32,
}

fn client(server: &MockServer, auth: AuthScheme) -> HttpClient {
    HttpClient::from_config(&ClientConfig::new(server.uri(), "unused"), auth).unwrap()
}

#[tokio::test]
async fn test_get_sends_auth_header_and_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/1"))
        .and(header("Authorization", "Token abc"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let http = client(&server, AuthScheme::Token("abc".to_string()));
    let item: Item = http.get("/items/1").await.unwrap();
    assert_eq!(item, Item { id: 1 });
}

#[tokio::test]
async fn test_status_codes_map_onto_errors() {
    let server = MockServer::start().await;
    for (route, status, body) in [
        ("/missing", 404, "no such thing"),
        ("/unauthorized", 401, "bad token"),
        ("/forbidden", 403, "not your org"),
        ("/broken", 502, "upstream down"),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
    }
    let http = client(&server, AuthScheme::Bearer("k".to_string()));

    let err = http.get::<Item>("/missing").await.unwrap_err();
    assert!(err.is_not_found(), "{err}");
    assert!(err.to_string().contains("no such thing"));

    let err = http.get::<Item>("/unauthorized").await.unwrap_err();
    assert!(matches!(err, SouthboundError::Authentication(ref msg) if msg.contains("401")));

    let err = http.get::<Item>("/forbidden").await.unwrap_err();
    assert!(matches!(err, SouthboundError::Authentication(ref msg) if msg.contains("not your org")));

    let err = http.get::<Item>("/broken").await.unwrap_err();
    assert!(matches!(err, SouthboundError::Api(ref msg) if msg.contains("upstream down")));
}

#[tokio::test]
async fn test_schema_mismatch_is_validation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "one"})))
        .mount(&server)
        .await;

    let http = client(&server, AuthScheme::None);
    let err = http.get::<Item>("/items/1").await.unwrap_err();
    assert!(err.is_validation(), "{err}");
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rpc"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"method": "get", "id": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let http = client(&server, AuthScheme::None);
    let item: Item = http.post("/rpc", &json!({"method": "get", "id": 3})).await.unwrap();
    assert_eq!(item.id, 3);
}

#[tokio::test]
async fn test_link_pages_followed_until_no_next() {
    let server = MockServer::start().await;
    let base = server.uri();
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("startingAfter", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 3}, {"id": 4}]))
                .insert_header("Link", format!("<{base}/items?startingAfter=0>; rel=first, <{base}/items?startingAfter=4>; rel=\"next\"").as_str()),
        )
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("startingAfter", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 5}])))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 1}, {"id": 2}]))
                .insert_header("Link", format!("<{base}/items?startingAfter=2>; rel=next").as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let http = client(&server, AuthScheme::None);
    let items: Vec<Item> = http.fetch_all_link_pages(http.build_url("/items")).await.unwrap();
    let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_link_back_to_fetched_page_stops() {
    let server = MockServer::start().await;
    let base = server.uri();
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 1}]))
                .insert_header("Link", format!("<{base}/items>; rel=next").as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let http = client(&server, AuthScheme::None);
    let items: Vec<Item> = http.fetch_all_link_pages(http.build_url("/items")).await.unwrap();
    assert_eq!(items, vec![Item { id: 1 }]);
}
