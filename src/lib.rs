//! # Twilio API Rust Client
//!
//! A Rust client for the Twilio REST API, providing type-safe configuration,
//! a request executor, list pagination and webhook signature validation.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`TwilioConfig`] and [`TwilioConfigBuilder`]
//! - Validated newtypes for account credentials and host overrides
//! - An async [`Client`] that signs requests with HTTP basic auth and decodes
//!   JSON responses into typed records
//! - A [`PageIterator`](rest::PageIterator) that follows next-page cursors in
//!   both list envelope styles
//! - A [`TimeRangeIterator`](rest::TimeRangeIterator) that pages through records
//!   created within a time window
//! - Typed services for calls, messages, conferences, recordings, rooms and more
//! - Webhook signature validation via [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use twilio_api::{AccountSid, AuthToken, Client, TwilioConfig};
//!
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("AC58f1e8f2b1c6b88ca90a012a4be0c279").unwrap())
//!     .auth_token(AuthToken::new("your-auth-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(config).unwrap();
//! assert_eq!(client.account_sid().as_ref(), "AC58f1e8f2b1c6b88ca90a012a4be0c279");
//! ```
//!
//! ## Sending a Message
//!
//! ```rust,ignore
//! let message = client
//!     .messages()
//!     .send("+15017122661", "+15558675310", "Hello from Rust")
//!     .await?;
//! println!("queued {}", message.sid);
//! ```
//!
//! ## Paging Through a Collection
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::CallListParams;
//!
//! let mut pages = client.calls().page_iterator(&CallListParams::default())?;
//! while let Some(page) = pages.next().await? {
//!     for call in page {
//!         println!("{} {:?}", call.sid, call.status);
//!     }
//! }
//! ```
//!
//! `next()` returns `Ok(None)` once the listing is exhausted. An error leaves
//! the iterator where it was, so the same call can be retried.
//!
//! ## Handling Errors
//!
//! ```rust,ignore
//! use twilio_api::HttpError;
//!
//! match client.calls().get("CA123").await {
//!     Ok(call) => println!("{:?}", call.status),
//!     Err(e) if e.is_not_found() => println!("no such call"),
//!     Err(HttpError::Api(api)) => println!("Twilio error {}: {}", api.code, api.title),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Validating Webhooks
//!
//! ```rust,ignore
//! use twilio_api::webhooks::{validate_webhook, WebhookRequest, SIGNATURE_HEADER};
//!
//! let request = WebhookRequest::new(public_url, headers[SIGNATURE_HEADER].clone())
//!     .with_form_body(&body);
//! validate_webhook(&config, &request)?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: [`TwilioConfig`] and [`Client`] are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **No hidden retries**: Every call issues exactly one HTTP request

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod types;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{AccountSid, AuthToken, BaseUrl, Product, TwilioConfig, TwilioConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, Client, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, Params, Target,
};

// Re-export pagination types
pub use rest::{Page, PageIterator, TimeRange, TimeRangeIterator};
