//! Integration tests for the request executor.
//!
//! These tests verify authentication, parameter encoding, error mapping,
//! cancellation and redirect resolution against a mock server.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use twilio_api::clients::{HeaderInterceptor, HttpRequest, REQUEST_ID_HEADER};
use twilio_api::rest::resources::{Account, MessageCreateParams};
use twilio_api::{
    AccountSid, AuthToken, BaseUrl, Client, HttpError, HttpMethod, Product, Target, TwilioConfig,
    TwilioConfigBuilder,
};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn builder_for(server: &MockServer) -> TwilioConfigBuilder {
    TwilioConfig::builder()
        .account_sid(AccountSid::new("AC123").unwrap())
        .auth_token(AuthToken::new("token").unwrap())
        .base_url_for_all(&BaseUrl::new(server.uri()).unwrap())
}

fn create_client(server: &MockServer) -> Client {
    Client::new(builder_for(server).build().unwrap()).unwrap()
}

// ============================================================================
// Request Encoding Tests
// ============================================================================

#[tokio::test]
async fn test_post_sends_basic_auth_and_form_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123/Messages.json"))
        .and(header("authorization", "Basic QUMxMjM6dG9rZW4="))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(header("accept", "application/json"))
        .and(body_string_contains("To=%2B15558675310"))
        .and(body_string_contains("Body=hello+there"))
        .and(body_string_contains("MediaUrl=https%3A%2F%2Fexample.com%2Fa.png"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sid": "SM1",
            "to": "+15558675310",
            "body": "hello there",
            "status": "queued",
            "num_segments": "1",
            "error_code": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let message = client
        .messages()
        .create(&MessageCreateParams {
            to: "+15558675310".to_string(),
            from: Some("+15017122661".to_string()),
            body: Some("hello there".to_string()),
            media_url: vec!["https://example.com/a.png".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(message.sid, "SM1");
    assert_eq!(message.num_segments.get(), 1);
    assert!(message.error_code.is_zero());
}

#[tokio::test]
async fn test_get_sends_params_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/PhoneNumbers/%2B15108675310"))
        .and(query_param("Type", "carrier"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "phone_number": "+15108675310",
            "country_code": "US",
            "carrier": { "name": "verizon", "type": "mobile" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let number = client
        .lookups()
        .get("+15108675310", &[twilio_api::rest::resources::LookupType::Carrier])
        .await
        .unwrap();

    assert_eq!(number.phone_number, "+15108675310");
    assert_eq!(
        number.carrier.unwrap().line_type.as_deref(),
        Some("mobile")
    );
}

#[tokio::test]
async fn test_accounts_are_not_account_scoped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC999.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "AC999",
            "friendly_name": "sub",
            "status": "active",
            "owner_account_sid": "AC123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let account: Account = client.accounts().get("AC999").await.unwrap();
    assert_eq!(account.owner_account_sid.as_str(), Some("AC123"));
}

#[tokio::test]
async fn test_interceptor_adds_header() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/2010-04-01/Accounts/AC123/Calls/CA1.json"))
        .and(header("x-trace-id", "abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let config = builder_for(&server)
        .interceptor(Arc::new(HeaderInterceptor::new("X-Trace-Id", "abc")))
        .build()
        .unwrap();
    let client = Client::new(config).unwrap();

    client.calls().delete("CA1").await.unwrap();
}

#[tokio::test]
async fn test_user_agent_prefix_is_sent() {
    let server = MockServer::start().await;
    let expected = format!(
        "my-app/1.0 | twilio-api-rust v{} | Rust {}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_RUST_VERSION")
    );

    Mock::given(method("GET"))
        .and(path("/v1/Alerts/NO1"))
        .and(header("user-agent", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sid": "NO1" })))
        .expect(1)
        .mount(&server)
        .await;

    let config = builder_for(&server)
        .user_agent_prefix("my-app/1.0")
        .build()
        .unwrap();
    let client = Client::new(config).unwrap();
    let alert = client.alerts().get("NO1").await.unwrap();
    assert_eq!(alert.sid, "NO1");
}

// ============================================================================
// Error Mapping Tests
// ============================================================================

#[tokio::test]
async fn test_not_found_error_uses_transport_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Calls/CA404.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 20404,
            "message": "not found",
            "more_info": "https://www.twilio.com/docs/errors/20404",
            "status": 428
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.calls().get("CA404").await.unwrap_err();

    assert!(error.is_not_found());
    let api = error.api_error().unwrap();
    assert_eq!(api.code, 20404);
    assert_eq!(api.title, "not found");
    assert_eq!(api.more_info, "https://www.twilio.com/docs/errors/20404");
    assert_eq!(api.status, 404);
    assert_eq!(api.reported_status, Some(428));
}

#[tokio::test]
async fn test_empty_error_body_uses_canonical_reason() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Calls/CA1.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = create_client(&server);
    match client.calls().get("CA1").await.unwrap_err() {
        HttpError::Api(api) => {
            assert_eq!(api.code, 0);
            assert_eq!(api.status, 500);
            assert_eq!(api.title, "Internal Server Error");
            assert_eq!(api.reported_status, None);
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_mismatched_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Calls/CA1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[1, 2, 3]"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.calls().get("CA1").await.unwrap_err();
    assert!(matches!(error, HttpError::Decode { status: 200, .. }));
    assert!(!error.is_transport());
}

#[tokio::test]
async fn test_trailing_bytes_after_json_are_ignored() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Calls/CA1.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"sid": "CA1", "status": "busy"} trailing"#),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let call = client.calls().get("CA1").await.unwrap();
    assert_eq!(call.sid, "CA1");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let server = MockServer::start().await;
    let client = create_client(&server);
    drop(server);

    let error = client.calls().get("CA1").await.unwrap_err();
    assert!(matches!(error, HttpError::Network(_)));
    assert!(error.is_transport());
}

// ============================================================================
// Cancellation and Timeout Tests
// ============================================================================

#[tokio::test]
async fn test_cancellation_returns_promptly() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "sid": "AC123" }))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = HttpRequest::builder(
        HttpMethod::Get,
        Target::path(Product::Api, "/2010-04-01/Accounts/AC123.json"),
    )
    .build()
    .unwrap();

    let started = std::time::Instant::now();
    let result: Result<Account, HttpError> = client
        .execute_with_cancel(request, tokio::time::sleep(Duration::from_millis(50)))
        .await;

    assert!(matches!(result, Err(HttpError::Cancelled)));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_cancel_future_that_never_fires_lets_request_finish() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sid": "AC123" })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = HttpRequest::builder(
        HttpMethod::Get,
        Target::path(Product::Api, "/2010-04-01/Accounts/AC123.json"),
    )
    .build()
    .unwrap();

    let account: Account = client
        .execute_with_cancel(request, std::future::pending())
        .await
        .unwrap();
    assert_eq!(account.sid, "AC123");
}

#[tokio::test]
async fn test_per_request_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123.json"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = HttpRequest::builder(
        HttpMethod::Get,
        Target::path(Product::Api, "/2010-04-01/Accounts/AC123.json"),
    )
    .timeout(Duration::from_millis(50))
    .build()
    .unwrap();

    let error = client.send(request).await.unwrap_err();
    match error {
        HttpError::Network(e) => assert!(e.is_timeout()),
        other => panic!("expected a timeout, got {other:?}"),
    }
}

// ============================================================================
// Raw Response and Redirect Tests
// ============================================================================

#[tokio::test]
async fn test_send_exposes_request_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(REQUEST_ID_HEADER, "RQ123")
                .set_body_json(json!({ "sid": "AC123" })),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = HttpRequest::builder(
        HttpMethod::Get,
        Target::path(Product::Api, "/2010-04-01/Accounts/AC123.json"),
    )
    .build()
    .unwrap();

    let response = client.send(request).await.unwrap();
    assert!(response.is_ok());
    assert_eq!(response.request_id(), Some("RQ123"));
}

#[tokio::test]
async fn test_media_url_is_resolved_without_following_redirect() {
    let server = MockServer::start().await;
    let storage = "https://media.example.com/ME1?Expires=1700000000";

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Messages/MM1/Media/ME1"))
        .respond_with(ResponseTemplate::new(307).insert_header("Location", storage))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let url = client.messages().media("MM1").get_url("ME1").await.unwrap();
    assert_eq!(url, storage);
}

#[tokio::test]
async fn test_media_url_without_redirect_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Messages/MM1/Media/ME1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("binary"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client
        .messages()
        .media("MM1")
        .get_url("ME1")
        .await
        .unwrap_err();
    assert!(matches!(error, HttpError::MissingRedirect { status: 200 }));
}

#[tokio::test]
async fn test_media_url_missing_media_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Messages/MM1/Media/ME404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 20404,
            "message": "The requested resource was not found",
            "status": 404
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client
        .messages()
        .media("MM1")
        .get_url("ME404")
        .await
        .unwrap_err();
    assert!(error.is_not_found());
    assert_eq!(error.api_error().unwrap().reported_status, None);
}
