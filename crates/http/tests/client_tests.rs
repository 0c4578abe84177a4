//! Integration tests for the portal HTTP client

use cachorro_core::{Credentials, SubscriptionStatus, TokenPair, TokenStore};
use cachorro_http::{ApiClient, BearerAuth, ClientError, RequestDescriptor};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authed_client(base_url: &str, store: &TokenStore) -> ApiClient {
    ApiClient::builder()
        .base_url(base_url)
        .interceptor(BearerAuth::new(store.clone()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_client_builder() {
    let client = ApiClient::builder()
        .base_url("http://localhost:8080/")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = ApiClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));

    let result = ApiClient::builder().base_url("/").build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_obtain_token_posts_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/token/"))
        .and(body_json(json!({"username": "rex", "password": "bone"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access": "acc-1", "refresh": "ref-1"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let tokens = client
        .obtain_token(&Credentials::new("rex", "bone"))
        .await
        .unwrap();

    assert_eq!(tokens, TokenPair::new("acc-1", "ref-1"));
}

#[tokio::test]
async fn test_obtain_token_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/token/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(
            json!({"detail": "No active account found with the given credentials"}),
        ))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let result = client.obtain_token(&Credentials::new("rex", "wrong")).await;

    let err = result.unwrap_err();
    assert!(matches!(err, ClientError::AuthenticationFailed(_)));
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_subscription_carries_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/subscription/"))
        .and(header("authorization", "Bearer acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "active",
            "next_due_date": "2025-01-31",
            "days_remaining": 5,
            "amount_cents": 4990
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = TokenStore::in_memory();
    store.set(&TokenPair::new("acc-1", "ref-1")).unwrap();

    let subscription = authed_client(&mock_server.uri(), &store)
        .subscription()
        .await
        .unwrap();

    assert_eq!(subscription.status, SubscriptionStatus::Active);
    assert_eq!(subscription.days_remaining, Some(5));
    assert_eq!(subscription.amount_cents, Some(4990));
}

#[tokio::test]
async fn test_every_request_after_login_carries_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/token/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access": "fresh", "refresh": "r"})),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "none"})))
        .mount(&mock_server)
        .await;

    let store = TokenStore::in_memory();
    let client = authed_client(&mock_server.uri(), &store);

    let tokens = client
        .obtain_token(&Credentials::new("rex", "bone"))
        .await
        .unwrap();
    store.set(&tokens).unwrap();
    client.subscription().await.unwrap();
    client.subscription().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    assert!(requests[0].headers.get("authorization").is_none());
    for request in &requests[1..] {
        assert_eq!(request.headers.get("authorization").unwrap(), "Bearer fresh");
    }
}

#[tokio::test]
async fn test_missing_token_omits_header_without_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/subscription/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let store = TokenStore::in_memory();
    let client = authed_client(&mock_server.uri(), &store);

    let prepared = client.prepare(reqwest::Method::GET, "/api/subscription/");
    assert!(prepared.headers.get(AUTHORIZATION).is_none());

    // The request is still sent; the server decides
    let result = client.subscription().await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_interceptors_run_in_order() {
    let store = TokenStore::in_memory();
    store.set(&TokenPair::new("acc", "ref")).unwrap();

    let client = ApiClient::builder()
        .base_url("http://localhost:8080")
        .interceptor(BearerAuth::new(store))
        .interceptor(|mut request: RequestDescriptor| {
            // Later interceptors see what earlier ones added
            let seen = request.headers.contains_key(AUTHORIZATION);
            request.headers.insert(
                "x-saw-auth",
                HeaderValue::from_static(if seen { "yes" } else { "no" }),
            );
            request
        })
        .build()
        .unwrap();

    let prepared = client.prepare(reqwest::Method::GET, "/api/subscription/");

    assert_eq!(prepared.headers.get("x-saw-auth").unwrap(), "yes");
    assert_eq!(prepared.headers.get(AUTHORIZATION).unwrap(), "Bearer acc");
}

#[tokio::test]
async fn test_error_statuses_map_to_variants() {
    let cases = [
        (400, Some(400)),
        (401, Some(401)),
        (403, Some(403)),
        (404, Some(404)),
        (500, Some(500)),
        (503, Some(503)),
    ];

    for (code, expected) in cases {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/subscription/"))
            .respond_with(ResponseTemplate::new(code).set_body_string("nope"))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let err = client.subscription().await.unwrap_err();

        assert_eq!(err.status(), expected, "status {code}");
    }
}

#[tokio::test]
async fn test_server_error_keeps_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/subscription/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let result = client.subscription().await;

    match result {
        Err(ClientError::ServerError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/subscription/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let result = client.subscription().await;

    assert!(matches!(result, Err(ClientError::Request(_))));
}

#[tokio::test]
async fn test_timeout_surfaces_as_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/subscription/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "none"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    match client.subscription().await {
        Err(ClientError::Request(err)) => assert!(err.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}
