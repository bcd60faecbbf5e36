//! HTTP-specific error types for the Twilio API client.
//!
//! # Error Handling
//!
//! The client separates failures into categories so callers can branch on
//! them without matching message text:
//!
//! - [`ApiError`]: The API answered with a non-2xx status
//! - [`HttpError::Decode`]: A 2xx body did not match the expected shape
//! - [`HttpError::Network`] and [`HttpError::Cancelled`]: No response was obtained
//! - [`InvalidHttpRequestError`]: A request failed validation before being sent
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::HttpError;
//!
//! match client.calls().get("CA123").await {
//!     Ok(call) => println!("status: {:?}", call.status),
//!     Err(e) if e.is_not_found() => println!("no such call"),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.code, e.title),
//!     Err(e) if e.is_transport() => println!("never got a response: {e}"),
//!     Err(e) => println!("other failure: {e}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::types::{ErrorCode, UintStr};

/// Error code the API uses for a missing resource.
pub const NOT_FOUND_CODE: u32 = 20404;

/// A well-formed error answer from the API.
///
/// `status` is always the transport status code. The error body carries its
/// own `status` field which occasionally disagrees; when it does, the body's
/// value is kept in `reported_status`.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::ApiError;
///
/// let body = br#"{"code": 20404, "message": "not found", "more_info": "https://www.twilio.com/docs/errors/20404", "status": 404}"#;
/// let error = ApiError::from_response(404, body);
///
/// assert_eq!(error.code, 20404);
/// assert_eq!(error.title, "not found");
/// assert_eq!(error.status, 404);
/// assert!(error.reported_status.is_none());
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{title} (code {code}, status {status})")]
pub struct ApiError {
    /// Provider error code, or `0` when the body carried none.
    pub code: u32,
    /// Human-readable message.
    pub title: String,
    /// Link to documentation for the error code.
    pub more_info: String,
    /// HTTP status of the response.
    pub status: u16,
    /// Status from the error body, only when it differs from `status`.
    pub reported_status: Option<u16>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    code: ErrorCode,
    #[serde(default)]
    message: String,
    #[serde(default)]
    more_info: String,
    #[serde(default)]
    status: Option<UintStr>,
}

impl ApiError {
    /// Builds an error from a non-2xx response.
    ///
    /// Bodies that are not an error envelope still produce an error with code
    /// `0`; the title is then the body text, or the canonical reason phrase when
    /// the body is empty.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let envelope = serde_json::Deserializer::from_slice(body)
            .into_iter::<ErrorEnvelope>()
            .next()
            .and_then(Result::ok);

        let Some(envelope) = envelope else {
            return Self {
                code: 0,
                title: fallback_title(status, body),
                more_info: String::new(),
                status,
                reported_status: None,
            };
        };

        let reported_status = envelope
            .status
            .and_then(|s| u16::try_from(s.get()).ok())
            .filter(|&s| s != status);
        if let Some(reported) = reported_status {
            tracing::warn!(
                status,
                reported,
                code = envelope.code.0,
                "error body status disagrees with HTTP status"
            );
        }

        let title = if envelope.message.is_empty() {
            fallback_title(status, &[])
        } else {
            envelope.message
        };

        Self {
            code: envelope.code.0,
            title,
            more_info: envelope.more_info,
            status,
            reported_status,
        }
    }

    /// Returns `true` for the provider's "resource not found" answer.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == NOT_FOUND_CODE || self.status == 404
    }
}

fn fallback_title(status: u16, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown status")
        .to_string()
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::InvalidPath {
///     path: "Calls.json".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Invalid request path 'Calls.json'. Paths must start with '/'.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// An absolute URL target without an `http` or `https` scheme.
    #[error("Invalid request URL '{url}'. Expected an absolute http or https URL.")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
    },

    /// A relative path target that does not start with `/`.
    #[error("Invalid request path '{path}'. Paths must start with '/'.")]
    InvalidPath {
        /// The rejected path.
        path: String,
    },

    /// Parameters could not be converted to form fields.
    #[error("Invalid request parameters: {reason}")]
    Params {
        /// What went wrong.
        reason: String,
    },

    /// A `DELETE` request that carries parameters.
    #[error("Cannot send parameters with {method}.")]
    ParamsNotAllowed {
        /// The request method.
        method: String,
    },

    /// A time range whose start lies after its end.
    #[error("Invalid time range: start {start} is after end {end}.")]
    InvalidTimeRange {
        /// The requested start.
        start: String,
        /// The requested end.
        end: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A successful response body could not be decoded.
    #[error("Failed to decode response with status {status}: {source}")]
    Decode {
        /// HTTP status of the response.
        status: u16,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Network or connection error, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The caller's cancellation signal fired before a response arrived.
    #[error("Request cancelled")]
    Cancelled,

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A redirect was expected but the response had no `Location`.
    #[error("Expected a redirect, got status {status} without a Location header")]
    MissingRedirect {
        /// HTTP status of the response.
        status: u16,
    },
}

impl HttpError {
    /// Returns `true` when no response was obtained.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Cancelled)
    }

    /// Returns the API error, if this is one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` for an API "not found" answer.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::Api(e) => e.is_not_found(),
            _ => false,
        }
    }
}
