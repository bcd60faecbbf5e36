//! Integration tests for the typed resource services.
//!
//! These tests check that convenience operations send the parameters the API
//! expects and decode what it returns.

use serde_json::json;
use twilio_api::rest::resources::{
    AlertListParams, CallStatus, ConferenceStatus, LogLevel, RecordingListParams, RoomCreateParams,
    RoomStatus, RoomType,
};
use twilio_api::{AccountSid, AuthToken, BaseUrl, Client, TwilioConfig};
use wiremock::matchers::{body_string, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> Client {
    let config = TwilioConfig::builder()
        .account_sid(AccountSid::new("AC123").unwrap())
        .auth_token(AuthToken::new("token").unwrap())
        .base_url_for_all(&BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Client::new(config).unwrap()
}

// ============================================================================
// Calls
// ============================================================================

#[tokio::test]
async fn test_hangup_posts_completed_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123/Calls/CA1.json"))
        .and(body_string("Status=completed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "CA1",
            "status": "completed",
            "duration": "42"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let call = client.calls().hangup("CA1").await.unwrap();
    assert_eq!(call.status, CallStatus::Completed);
    assert_eq!(call.duration.duration().unwrap().as_secs(), 42);
}

#[tokio::test]
async fn test_call_recordings_are_nested_under_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Calls/CA1/Recordings.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recordings": [
                { "sid": "RE1", "call_sid": "CA1", "duration": "7", "channels": "2" }
            ],
            "page": 0,
            "page_size": 50,
            "next_page_uri": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let recordings = client
        .calls()
        .recordings("CA1", &RecordingListParams::default())
        .unwrap()
        .collect_all()
        .await
        .unwrap();

    assert_eq!(recordings.len(), 1);
    assert_eq!(recordings[0].channels.get(), 2);
}

// ============================================================================
// Messages
// ============================================================================

#[tokio::test]
async fn test_redact_posts_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123/Messages/SM1.json"))
        .and(body_string("Body="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "SM1",
            "body": "",
            "status": "delivered"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let message = client.messages().redact("SM1").await.unwrap();
    assert!(message.body.is_empty());
}

// ============================================================================
// Conferences
// ============================================================================

#[tokio::test]
async fn test_mute_participant() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/2010-04-01/Accounts/AC123/Conferences/CF1/Participants/CA7.json",
        ))
        .and(body_string("Muted=true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "call_sid": "CA7",
            "conference_sid": "CF1",
            "muted": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let participant = client
        .conferences()
        .participants("CF1")
        .mute("CA7")
        .await
        .unwrap();
    assert!(participant.muted);
}

#[tokio::test]
async fn test_end_conference() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123/Conferences/CF1.json"))
        .and(body_string("Status=completed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "CF1",
            "status": "completed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let conference = client
        .conferences()
        .update(
            "CF1",
            &twilio_api::rest::resources::ConferenceUpdateParams {
                status: Some(ConferenceStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(conference.status, ConferenceStatus::Completed);
}

// ============================================================================
// Newer Products
// ============================================================================

#[tokio::test]
async fn test_create_and_complete_room() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/Rooms"))
        .and(body_string_contains("UniqueName=standup"))
        .and(body_string_contains("Type=group"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sid": "RM1",
            "unique_name": "standup",
            "status": "in-progress",
            "type": "group",
            "duration": null
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/Rooms/RM1"))
        .and(body_string("Status=completed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "RM1",
            "status": "completed",
            "type": "group",
            "duration": 60
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let room = client
        .rooms()
        .create(&RoomCreateParams {
            unique_name: Some("standup".to_string()),
            room_type: Some(RoomType::Group),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(room.status, RoomStatus::InProgress);
    assert!(!room.duration.is_valid());

    let room = client.rooms().complete(&room.sid).await.unwrap();
    assert_eq!(room.status, RoomStatus::Completed);
    assert!(room.duration.is_valid());
}

#[tokio::test]
async fn test_alert_page_uses_monitor_root() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/Alerts"))
        .and(query_param("LogLevel", "error"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "alerts": [{ "sid": "NO1", "error_code": "11200", "log_level": "error" }],
            "meta": { "page": 0, "page_size": 50, "key": "alerts", "next_page_url": null }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let page = client
        .alerts()
        .get_page(&AlertListParams {
            log_level: Some(LogLevel::Error),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert!(!page.has_next());
    assert_eq!(page.items[0].error_code.0, 11200);
}
