//! Integration tests for webhook signature validation.
//!
//! These tests build requests the way an HTTP handler would, from the raw
//! URL, header and body, and validate them through the public API.

use twilio_api::auth::hmac::{body_sha256_hex, compute_signature};
use twilio_api::clients::Params;
use twilio_api::webhooks::{
    validate_incoming_request, validate_webhook, WebhookError, WebhookRequest, SIGNATURE_HEADER,
};
use twilio_api::{AccountSid, AuthToken, TwilioConfig};

const URL: &str = "https://mycompany.com/myapp.php?foo=1&bar=2";
const SIGNATURE: &str = "RSOYDt4T1cUTdK1PDd93/VVr8B8=";
const FORM_BODY: &[u8] = b"CallSid=CA1234567890ABCDE&Caller=%2B14158675309&Digits=1234&From=%2B14158675309&To=%2B18005551212";

fn config() -> TwilioConfig {
    TwilioConfig::builder()
        .account_sid(AccountSid::new("AC123").unwrap())
        .auth_token(AuthToken::new("12345").unwrap())
        .build()
        .unwrap()
}

#[test]
fn test_signature_header_name() {
    assert_eq!(SIGNATURE_HEADER, "X-Twilio-Signature");
}

#[test]
fn test_reference_form_request_is_accepted() {
    let request = WebhookRequest::new(URL, SIGNATURE).with_form_body(FORM_BODY);
    assert_eq!(validate_webhook(&config(), &request), Ok(()));
}

#[test]
fn test_field_order_in_body_does_not_matter() {
    let reordered = b"To=%2B18005551212&From=%2B14158675309&Digits=1234&Caller=%2B14158675309&CallSid=CA1234567890ABCDE";
    let request = WebhookRequest::new(URL, SIGNATURE).with_form_body(reordered);
    assert_eq!(validate_webhook(&config(), &request), Ok(()));
}

#[test]
fn test_unsigned_query_parameter_is_rejected() {
    let request = WebhookRequest::new(format!("{URL}&cat=3"), SIGNATURE).with_form_body(FORM_BODY);
    assert_eq!(
        validate_webhook(&config(), &request),
        Err(WebhookError::InvalidSignature)
    );
}

#[test]
fn test_trailing_slash_changes_signature() {
    let signature = compute_signature("https://example.com/hook", &Params::new(), "12345");
    let request = WebhookRequest::new("https://example.com/hook/", signature);
    assert_eq!(
        validate_incoming_request("12345", &request),
        Err(WebhookError::InvalidSignature)
    );
}

#[test]
fn test_json_webhook_with_body_hash() {
    let body = br#"{"event": "call.completed"}"#;
    let url = format!(
        "https://example.com/events?bodySHA256={}",
        body_sha256_hex(body)
    );
    let signature = compute_signature(&url, &Params::new(), "12345");

    let request = WebhookRequest::new(url.clone(), signature.clone()).with_body(body.to_vec());
    assert_eq!(validate_webhook(&config(), &request), Ok(()));

    let tampered =
        WebhookRequest::new(url, signature).with_body(br#"{"event": "forged"}"#.to_vec());
    assert_eq!(
        validate_webhook(&config(), &tampered),
        Err(WebhookError::BodyHashMismatch)
    );
}

#[test]
fn test_missing_header_is_reported() {
    let request = WebhookRequest::new(URL, "").with_form_body(FORM_BODY);
    assert_eq!(
        validate_webhook(&config(), &request),
        Err(WebhookError::MissingSignature)
    );
}

#[test]
fn test_json_webhook_with_request_uri_only() {
    let body = br#"{"event": "call.completed"}"#;
    let url = format!("/events?bodySHA256={}", body_sha256_hex(body));
    let signature = compute_signature(&url, &Params::new(), "12345");

    let tampered =
        WebhookRequest::new(url, signature).with_body(br#"{"tampered": true}"#.to_vec());
    assert_eq!(
        validate_webhook(&config(), &tampered),
        Err(WebhookError::BodyHashMismatch)
    );
}
