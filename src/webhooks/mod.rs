//! Inbound webhook validation.
//!
//! Twilio calls the application's URLs for incoming calls, messages and
//! status changes. Each request is signed so the application can tell it
//! really came from Twilio.
//!
//! # Overview
//!
//! - [`WebhookRequest`]: The URL, signature and body of an incoming request
//! - [`validate_webhook`]: Validates against the configured tokens
//! - [`validate_incoming_request`]: Validates against one token
//! - [`WebhookError`]: Why a request was rejected
//! - [`SIGNATURE_HEADER`]: The header the signature arrives in
//!
//! # Example
//!
//! ```rust
//! use twilio_api::webhooks::{validate_webhook, WebhookError, WebhookRequest};
//! use twilio_api::{AccountSid, AuthToken, TwilioConfig};
//!
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("AC123").unwrap())
//!     .auth_token(AuthToken::new("12345").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // In a real handler these come from the HTTP request
//! let request = WebhookRequest::new(
//!     "https://mycompany.com/myapp.php?foo=1&bar=2",
//!     "RSOYDt4T1cUTdK1PDd93/VVr8B8=",
//! )
//! .with_form_body(b"CallSid=CA1234567890ABCDE&Caller=%2B14158675309&Digits=1234&From=%2B14158675309&To=%2B18005551212");
//!
//! match validate_webhook(&config, &request) {
//!     Ok(()) => println!("accepted"),
//!     Err(WebhookError::MissingSignature | WebhookError::InvalidSignature) => println!("403"),
//!     Err(WebhookError::BodyHashMismatch) => println!("400"),
//! }
//! ```

mod errors;
mod verification;

pub use errors::WebhookError;
pub use verification::{
    validate_incoming_request, validate_webhook, WebhookRequest, BODY_SHA256_PARAM,
    SIGNATURE_HEADER,
};
