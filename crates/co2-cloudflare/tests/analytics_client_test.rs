#![allow(clippy::unwrap_used)]
// Integration tests for `CloudflareClient` using wiremock.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use co2_cloudflare::{CloudflareClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup(token: &str) -> (MockServer, CloudflareClient) {
    let server = MockServer::start().await;
    let secret: secrecy::SecretString = token.to_string().into();
    let client = CloudflareClient::from_token_with_endpoint(
        &secret,
        &server.uri(),
        &TransportConfig::default(),
    )
    .unwrap();
    (server, client)
}

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn two_day_envelope() -> serde_json::Value {
    json!({
        "data": {
            "viewer": {
                "zones": [{
                    "httpRequests1dGroups": [
                        {
                            "dimensions": { "date": "2024-01-01" },
                            "sum": { "requests": 10, "bytes": 1000 }
                        },
                        {
                            "dimensions": { "date": "2024-01-02" },
                            "sum": { "requests": 5, "bytes": 500 }
                        }
                    ]
                }]
            }
        }
    })
}

// ── Success path ────────────────────────────────────────────────────

#[tokio::test]
async fn test_daily_traffic_success() {
    let (server, client) = setup("test-token").await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_partial_json(json!({
            "variables": {
                "zoneTag": "zone123",
                "since": "2024-01-01",
                "until": "2024-01-02"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_day_envelope()))
        .mount(&server)
        .await;

    let groups = client
        .daily_traffic("zone123", day("2024-01-01"), day("2024-01-02"))
        .await
        .unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].date, Some(day("2024-01-01")));
    assert_eq!(groups[0].requests, 10);
    assert_eq!(groups[0].bytes, 1000);
    assert_eq!(groups[1].date, Some(day("2024-01-02")));
    assert_eq!(groups[1].bytes, 500);
}

#[tokio::test]
async fn test_query_names_daily_groups() {
    let (server, client) = setup("test-token").await;

    // The query text itself travels in the body; assert the aggregation
    // surface so a field rename upstream is caught by the matcher.
    Mock::given(method("POST"))
        .and(body_partial_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_day_envelope()))
        .mount(&server)
        .await;

    client
        .daily_traffic("zone123", day("2024-01-01"), day("2024-01-02"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body).to_string();
    assert!(body.contains("httpRequests1dGroups"), "query body:\n{body}");
    assert!(body.contains("date_ASC"), "query body:\n{body}");
    assert!(body.contains("limit: 100"), "query body:\n{body}");
}

// ── Degenerate bodies ───────────────────────────────────────────────

#[tokio::test]
async fn test_null_zones_yield_empty() {
    let (server, client) = setup("test-token").await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"viewer": {"zones": null}}})),
        )
        .mount(&server)
        .await;

    let groups = client
        .daily_traffic("zone123", day("2024-01-01"), day("2024-01-31"))
        .await
        .unwrap();

    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_missing_numeric_fields_default_to_zero() {
    let (server, client) = setup("test-token").await;

    let envelope = json!({
        "data": {
            "viewer": {
                "zones": [{
                    "httpRequests1dGroups": [
                        { "dimensions": { "date": "2024-02-01" }, "sum": { "requests": 9 } },
                        { "sum": { "bytes": 77 } }
                    ]
                }]
            }
        }
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope))
        .mount(&server)
        .await;

    let groups = client
        .daily_traffic("zone123", day("2024-02-01"), day("2024-02-02"))
        .await
        .unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].bytes, 0);
    assert_eq!(groups[1].date, None);
    assert_eq!(groups[1].requests, 0);
    assert_eq!(groups[1].bytes, 77);
}

// ── Failure paths ───────────────────────────────────────────────────

#[tokio::test]
async fn test_http_error_status() {
    let (server, client) = setup("test-token").await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let result = client
        .daily_traffic("zone123", day("2024-01-01"), day("2024-01-31"))
        .await;

    assert!(
        matches!(result, Err(Error::Status { status: 500, .. })),
        "expected Status error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_graphql_errors_array() {
    let (server, client) = setup("test-token").await;

    let envelope = json!({
        "data": null,
        "errors": [{ "message": "zone not found", "path": ["viewer", "zones"] }]
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope))
        .mount(&server)
        .await;

    let result = client
        .daily_traffic("zone123", day("2024-01-01"), day("2024-01-31"))
        .await;

    match result {
        Err(Error::Api { payload }) => {
            assert!(payload.contains("zone not found"), "payload: {payload}");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_errors_array_is_not_an_error() {
    let (server, client) = setup("test-token").await;

    let envelope = json!({
        "data": { "viewer": { "zones": [] } },
        "errors": []
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope))
        .mount(&server)
        .await;

    let groups = client
        .daily_traffic("zone123", day("2024-01-01"), day("2024-01-31"))
        .await
        .unwrap();

    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_malformed_body() {
    let (server, client) = setup("test-token").await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let result = client
        .daily_traffic("zone123", day("2024-01-01"), day("2024-01-31"))
        .await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unauthorized_is_auth() {
    let (server, client) = setup("bad-token").await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let err = client
        .daily_traffic("zone123", day("2024-01-01"), day("2024-01-31"))
        .await
        .unwrap_err();

    assert!(err.is_auth(), "expected auth-flavored error, got: {err:?}");
}
