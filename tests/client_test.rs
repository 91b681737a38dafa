use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cloudflare_zone_manager::{CloudflareClient, ZoneManagerError, ZoneManagerResult};

const API_TOKEN: &str = "test-token";

fn client_for(server: &MockServer) -> CloudflareClient {
    CloudflareClient::builder(API_TOKEN)
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn list_zones_decodes_the_response_envelope() -> ZoneManagerResult<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(query_param("name", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "result": [{ "id": "abc123", "name": "example.com" }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.list_zones("example.com").await?;

    assert!(response.success);
    let zones = response.result.expect("zone list should be present");
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].id, "abc123");
    assert_eq!(zones[0].name, "example.com");
    Ok(())
}

#[tokio::test]
async fn error_envelopes_pass_through_undisturbed() -> ZoneManagerResult<()> {
    let server = MockServer::start().await;

    // A rejected call still decodes; interpreting it is the manager's job
    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errors": [{ "code": 7003, "message": "Could not route to /zones" }],
            "result": null
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.list_zones("example.com").await?;

    assert!(!response.success);
    assert!(response.result.is_none());
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].code, 7003);
    assert_eq!(response.errors[0].message, "Could not route to /zones");
    Ok(())
}

#[tokio::test]
async fn malformed_bodies_surface_as_transport_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.list_zones("example.com").await;

    match result {
        Err(ZoneManagerError::Transport(_)) => {}
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn every_request_carries_the_configured_headers() -> ZoneManagerResult<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "result": []
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/zones/abc123/purge_cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "result": { "id": "abc123" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.list_zones("example.com").await?;
    client.purge_cache("abc123").await?;

    let requests = server.received_requests().await.expect("requests recorded");
    assert_eq!(requests.len(), 2);
    for request in &requests {
        let auth = request
            .headers
            .get("authorization")
            .expect("authorization header present")
            .to_str()
            .expect("header should be valid ascii");
        assert_eq!(auth, "Bearer test-token");

        let content_type = request
            .headers
            .get("content-type")
            .expect("content-type header present")
            .to_str()
            .expect("header should be valid ascii");
        assert_eq!(content_type, "application/json");
    }
    Ok(())
}
