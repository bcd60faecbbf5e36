//! HTTP response type for the Twilio API client.
//!
//! This module provides [`HttpResponse`], a fully-read response with
//! case-insensitive header lookup and JSON decoding.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// Header carrying the provider's request identifier.
pub const REQUEST_ID_HEADER: &str = "twilio-request-id";

/// A response from the Twilio API with its body fully read.
///
/// Header names are stored lowercase.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use twilio_api::clients::HttpResponse;
///
/// let mut headers = HashMap::new();
/// headers.insert("twilio-request-id".to_string(), vec!["RQ123".to_string()]);
///
/// let response = HttpResponse::new(200, headers, br#"{"sid": "CA123"}"#.to_vec());
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("RQ123"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response. Header names are lowercased.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for a 2xx status.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` for a 3xx status.
    #[must_use]
    pub const fn is_redirect(&self) -> bool {
        self.code >= 300 && self.code <= 399
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Twilio-Request-Id` header, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header(REQUEST_ID_HEADER)
    }

    /// Returns the `Location` header, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decodes the first JSON value in the body.
    ///
    /// Bytes after the first complete value are ignored.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the body is empty or does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::Deserializer::from_slice(&self.body)
            .into_iter::<T>()
            .next()
            .unwrap_or_else(|| serde_json::from_slice(&self.body))
    }
}
