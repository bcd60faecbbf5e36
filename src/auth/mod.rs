//! Authentication types for the Twilio API client.
//!
//! This module provides the account credentials used for HTTP basic
//! authentication and the HMAC signature primitive used to authenticate
//! inbound webhook requests.
//!
//! # Overview
//!
//! - [`Credentials`]: The account SID and auth token pair
//! - [`hmac`]: HMAC-SHA1 request signatures and constant-time comparison
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{AccountSid, AuthToken, Credentials};
//!
//! let credentials = Credentials::new(
//!     AccountSid::new("AC123").unwrap(),
//!     AuthToken::new("token").unwrap(),
//! );
//! assert_eq!(credentials.basic_auth(), ("AC123", "token"));
//! ```

mod credentials;
pub mod hmac;

pub use credentials::Credentials;
