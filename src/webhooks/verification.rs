//! Webhook signature validation.
//!
//! Twilio signs every request it sends to an application with HMAC-SHA1
//! keyed by the account's auth token and puts the result in the
//! `X-Twilio-Signature` header. This module checks that signature.
//!
//! - [`validate_webhook`]: High-level check using a [`TwilioConfig`], with token rotation
//! - [`validate_incoming_request`]: Low-level check against a single auth token
//!
//! # Form and JSON bodies
//!
//! For form-encoded requests the signature covers the URL and every form
//! field. Requests with other bodies (JSON, for instance) carry a
//! `bodySHA256` query parameter instead: the signature covers the URL alone,
//! and the body must hash to that parameter.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::auth::hmac::compute_signature;
//! use twilio_api::clients::Params;
//! use twilio_api::webhooks::{validate_incoming_request, WebhookRequest};
//!
//! let url = "https://example.com/sms";
//! let body = b"From=%2B15558675310&Body=hello+there";
//!
//! let mut form = Params::new();
//! form.set("From", "+15558675310");
//! form.set("Body", "hello there");
//! let signature = compute_signature(url, &form, "token");
//!
//! let request = WebhookRequest::new(url, signature).with_form_body(body);
//! assert!(validate_incoming_request("token", &request).is_ok());
//! ```

use crate::auth::hmac::{body_sha256_hex, compute_signature, constant_time_compare};
use crate::clients::Params;
use crate::config::TwilioConfig;
use crate::webhooks::WebhookError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "X-Twilio-Signature";

/// Query parameter carrying the SHA-256 hex digest of a non-form body.
pub const BODY_SHA256_PARAM: &str = "bodySHA256";

// ============================================================================
// WebhookRequest
// ============================================================================

/// An incoming webhook request as seen by the application.
///
/// The URL must be the full URL Twilio requested, including scheme, host,
/// port (if it was explicit) and query string, exactly as Twilio sent it.
/// Applications behind a proxy have to reconstruct the public URL.
///
/// # Example
///
/// ```rust
/// use twilio_api::webhooks::WebhookRequest;
///
/// let request = WebhookRequest::new("https://example.com/voice", "sig")
///     .with_form_body(b"CallSid=CA123&Digits=1%232");
///
/// assert_eq!(request.form().get("Digits"), Some("1#2"));
/// assert_eq!(request.signature(), "sig");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WebhookRequest {
    url: String,
    signature: String,
    form: Params,
    body: Vec<u8>,
}

impl WebhookRequest {
    /// Creates a request from its URL and `X-Twilio-Signature` value.
    #[must_use]
    pub fn new(url: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            signature: signature.into(),
            form: Params::new(),
            body: Vec::new(),
        }
    }

    /// Sets already-parsed form fields.
    #[must_use]
    pub fn with_form(mut self, form: Params) -> Self {
        self.form = form;
        self
    }

    /// Parses an `application/x-www-form-urlencoded` body into form fields.
    ///
    /// The raw bytes are kept as the body too.
    #[must_use]
    pub fn with_form_body(mut self, body: &[u8]) -> Self {
        self.form = parse_form(body);
        self.body = body.to_vec();
        self
    }

    /// Sets a raw body, e.g. JSON, to be checked against `bodySHA256`.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the signature header value.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Returns the form fields.
    #[must_use]
    pub const fn form(&self) -> &Params {
        &self.form
    }

    /// Returns the raw body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the `bodySHA256` query value, if the URL carries one.
    ///
    /// Works on absolute URLs and on bare request URIs such as `/hook?a=1`.
    fn body_hash(&self) -> Option<String> {
        let (_, query) = self.url.split_once('?')?;
        let query = query.split_once('#').map_or(query, |(query, _)| query);
        parse_form(query.as_bytes())
            .get(BODY_SHA256_PARAM)
            .map(str::to_string)
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

fn parse_form(body: &[u8]) -> Params {
    String::from_utf8_lossy(body)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(name), decode_component(value))
        })
        .collect()
}

// ============================================================================
// Validation Functions
// ============================================================================

fn signature_matches(request: &WebhookRequest, auth_token: &str, body_hash: Option<&str>) -> bool {
    let expected = if body_hash.is_some() {
        compute_signature(&request.url, &Params::new(), auth_token)
    } else {
        compute_signature(&request.url, &request.form, auth_token)
    };
    constant_time_compare(&expected, &request.signature)
}

fn check_body_hash(request: &WebhookRequest, body_hash: Option<&str>) -> Result<(), WebhookError> {
    match body_hash {
        Some(expected) if !constant_time_compare(&body_sha256_hex(&request.body), expected) => {
            Err(WebhookError::BodyHashMismatch)
        }
        _ => Ok(()),
    }
}

/// Validates a webhook request against a single auth token.
///
/// # Errors
///
/// - [`WebhookError::MissingSignature`] if the signature is empty
/// - [`WebhookError::InvalidSignature`] if it does not match
/// - [`WebhookError::BodyHashMismatch`] if the URL carries `bodySHA256` and
///   the body hashes to something else
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::Params;
/// use twilio_api::webhooks::{validate_incoming_request, WebhookError, WebhookRequest};
///
/// let request = WebhookRequest::new("https://example.com/voice", "bogus");
/// assert_eq!(
///     validate_incoming_request("token", &request),
///     Err(WebhookError::InvalidSignature)
/// );
/// ```
pub fn validate_incoming_request(
    auth_token: &str,
    request: &WebhookRequest,
) -> Result<(), WebhookError> {
    if request.signature.is_empty() {
        return Err(WebhookError::MissingSignature);
    }
    let body_hash = request.body_hash();
    if !signature_matches(request, auth_token, body_hash.as_deref()) {
        return Err(WebhookError::InvalidSignature);
    }
    check_body_hash(request, body_hash.as_deref())
}

/// Validates a webhook request using the configured auth tokens.
///
/// The primary auth token is tried first, then the secondary token if one
/// is configured, so webhooks signed just before a token rotation still
/// validate.
///
/// # Errors
///
/// Same as [`validate_incoming_request`].
///
/// # Example
///
/// ```rust
/// use twilio_api::auth::hmac::compute_signature;
/// use twilio_api::clients::Params;
/// use twilio_api::webhooks::{validate_webhook, WebhookRequest};
/// use twilio_api::{AccountSid, AuthToken, TwilioConfig};
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("AC123").unwrap())
///     .auth_token(AuthToken::new("new-token").unwrap())
///     .secondary_auth_token(AuthToken::new("old-token").unwrap())
///     .build()
///     .unwrap();
///
/// let url = "https://example.com/status";
/// let signature = compute_signature(url, &Params::new(), "old-token");
/// let request = WebhookRequest::new(url, signature);
///
/// assert!(validate_webhook(&config, &request).is_ok());
/// ```
pub fn validate_webhook(
    config: &TwilioConfig,
    request: &WebhookRequest,
) -> Result<(), WebhookError> {
    match validate_incoming_request(config.auth_token().as_ref(), request) {
        Err(WebhookError::InvalidSignature) => match config.secondary_auth_token() {
            Some(secondary) => validate_incoming_request(secondary.as_ref(), request),
            None => Err(WebhookError::InvalidSignature),
        },
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountSid, AuthToken};

    const REFERENCE_URL: &str = "https://mycompany.com/myapp.php?foo=1&bar=2";
    const REFERENCE_SIGNATURE: &str = "RSOYDt4T1cUTdK1PDd93/VVr8B8=";

    fn reference_form() -> Params {
        let mut form = Params::new();
        form.set("Digits", "1234");
        form.set("To", "+18005551212");
        form.set("From", "+14158675309");
        form.set("Caller", "+14158675309");
        form.set("CallSid", "CA1234567890ABCDE");
        form
    }

    fn config(secondary: Option<&str>) -> TwilioConfig {
        let mut builder = TwilioConfig::builder()
            .account_sid(AccountSid::new("AC123").unwrap())
            .auth_token(AuthToken::new("12345").unwrap());
        if let Some(token) = secondary {
            builder = builder.secondary_auth_token(AuthToken::new(token).unwrap());
        }
        builder.build().unwrap()
    }

    // ========================================================================
    // Form requests
    // ========================================================================

    #[test]
    fn test_reference_request_validates() {
        let request =
            WebhookRequest::new(REFERENCE_URL, REFERENCE_SIGNATURE).with_form(reference_form());
        assert_eq!(validate_incoming_request("12345", &request), Ok(()));
    }

    #[test]
    fn test_extra_url_parameter_is_rejected() {
        let url = format!("{REFERENCE_URL}&cat=3");
        let request = WebhookRequest::new(url, REFERENCE_SIGNATURE).with_form(reference_form());
        assert_eq!(
            validate_incoming_request("12345", &request),
            Err(WebhookError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_form_value_is_rejected() {
        let mut form = reference_form();
        form.set("Digits", "9999");
        let request = WebhookRequest::new(REFERENCE_URL, REFERENCE_SIGNATURE).with_form(form);
        assert_eq!(
            validate_incoming_request("12345", &request),
            Err(WebhookError::InvalidSignature)
        );
    }

    #[test]
    fn test_wrong_token_is_rejected() {
        let request =
            WebhookRequest::new(REFERENCE_URL, REFERENCE_SIGNATURE).with_form(reference_form());
        assert_eq!(
            validate_incoming_request("54321", &request),
            Err(WebhookError::InvalidSignature)
        );
    }

    #[test]
    fn test_missing_signature() {
        let request = WebhookRequest::new(REFERENCE_URL, "").with_form(reference_form());
        assert_eq!(
            validate_incoming_request("12345", &request),
            Err(WebhookError::MissingSignature)
        );
    }

    #[test]
    fn test_form_body_is_parsed_and_validates() {
        let body = b"Digits=1234&To=%2B18005551212&From=%2B14158675309&Caller=%2B14158675309&CallSid=CA1234567890ABCDE";
        let request = WebhookRequest::new(REFERENCE_URL, REFERENCE_SIGNATURE).with_form_body(body);
        assert_eq!(request.form().get("To"), Some("+18005551212"));
        assert_eq!(validate_incoming_request("12345", &request), Ok(()));
    }

    #[test]
    fn test_parse_form_decodes_plus_as_space() {
        let form = parse_form(b"Body=hello+world%21&Empty=&Flag");
        assert_eq!(form.get("Body"), Some("hello world!"));
        assert_eq!(form.get("Empty"), Some(""));
        assert_eq!(form.get("Flag"), Some(""));
        assert_eq!(form.len(), 3);
    }

    // ========================================================================
    // bodySHA256 requests
    // ========================================================================

    const JSON_BODY: &[u8] = br#"{"property": "value", "boolean": true}"#;
    const JSON_HASH: &str = "0a1ff7634d9ab3b95db5c9a2dfe9416e41502b283a80c7cf19632632f96e6620";

    fn json_url() -> String {
        format!("https://mycompany.com/myapp.php?foo=1&bar=2&bodySHA256={JSON_HASH}")
    }

    #[test]
    fn test_json_body_validates_against_url_only() {
        let url = json_url();
        let signature = compute_signature(&url, &Params::new(), "12345");
        let request = WebhookRequest::new(url, signature).with_body(JSON_BODY);
        assert_eq!(validate_incoming_request("12345", &request), Ok(()));
    }

    #[test]
    fn test_json_body_hash_mismatch() {
        let url = json_url();
        let signature = compute_signature(&url, &Params::new(), "12345");
        let request = WebhookRequest::new(url, signature).with_body(b"{}".to_vec());
        assert_eq!(
            validate_incoming_request("12345", &request),
            Err(WebhookError::BodyHashMismatch)
        );
    }

    #[test]
    fn test_json_body_hash_is_checked_for_relative_url() {
        let url = format!("/myapp.php?bodySHA256={}", body_sha256_hex(JSON_BODY));
        let signature = compute_signature(&url, &Params::new(), "12345");

        let request = WebhookRequest::new(url.clone(), signature.clone()).with_body(JSON_BODY);
        assert_eq!(validate_incoming_request("12345", &request), Ok(()));

        let tampered =
            WebhookRequest::new(url, signature).with_body(br#"{"tampered": true}"#.to_vec());
        assert_eq!(
            validate_incoming_request("12345", &tampered),
            Err(WebhookError::BodyHashMismatch)
        );
    }

    #[test]
    fn test_body_hash_ignores_fragment() {
        let request = WebhookRequest::new("/hook?a=1&bodySHA256=abc#frag", "sig");
        assert_eq!(request.body_hash().as_deref(), Some("abc"));
        assert!(WebhookRequest::new("/hook", "sig").body_hash().is_none());
    }

    #[test]
    fn test_json_signature_mismatch_is_reported_before_hash() {
        let request = WebhookRequest::new(json_url(), "bogus").with_body(b"{}".to_vec());
        assert_eq!(
            validate_incoming_request("12345", &request),
            Err(WebhookError::InvalidSignature)
        );
    }

    // ========================================================================
    // Token rotation
    // ========================================================================

    #[test]
    fn test_validate_webhook_with_primary_token() {
        let request =
            WebhookRequest::new(REFERENCE_URL, REFERENCE_SIGNATURE).with_form(reference_form());
        assert_eq!(validate_webhook(&config(None), &request), Ok(()));
    }

    #[test]
    fn test_validate_webhook_falls_back_to_secondary_token() {
        let signature = compute_signature(REFERENCE_URL, &reference_form(), "old-token");
        let request = WebhookRequest::new(REFERENCE_URL, signature).with_form(reference_form());

        assert_eq!(
            validate_webhook(&config(None), &request),
            Err(WebhookError::InvalidSignature)
        );
        assert_eq!(validate_webhook(&config(Some("old-token")), &request), Ok(()));
    }

    #[test]
    fn test_validate_webhook_does_not_retry_missing_signature() {
        let request = WebhookRequest::new(REFERENCE_URL, "");
        assert_eq!(
            validate_webhook(&config(Some("old-token")), &request),
            Err(WebhookError::MissingSignature)
        );
    }
}
