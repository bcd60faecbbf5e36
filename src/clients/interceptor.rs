//! Hooks run on every outbound request.

use std::fmt;

use crate::clients::HttpRequest;

/// Inspects or modifies a request before it is sent.
///
/// Interceptors run in the order they were added to the configuration, after
/// request validation and before credentials and default headers are applied.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use twilio_api::clients::{HttpRequest, Interceptor};
/// use twilio_api::{AccountSid, AuthToken, TwilioConfig};
///
/// struct Tag;
///
/// impl Interceptor for Tag {
///     fn intercept(&self, request: &mut HttpRequest) {
///         request.headers.insert("X-Tag".to_string(), "billing".to_string());
///     }
/// }
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("AC123").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .interceptor(Arc::new(Tag))
///     .build()
///     .unwrap();
/// assert_eq!(config.interceptors().len(), 1);
/// ```
pub trait Interceptor: Send + Sync {
    /// Called once per request.
    fn intercept(&self, request: &mut HttpRequest);
}

/// Adds a fixed header to every request.
#[derive(Clone)]
pub struct HeaderInterceptor {
    name: String,
    value: String,
}

impl HeaderInterceptor {
    /// Creates an interceptor that sets `name: value`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Debug for HeaderInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header values may carry secrets.
        f.debug_struct("HeaderInterceptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Interceptor for HeaderInterceptor {
    fn intercept(&self, request: &mut HttpRequest) {
        request
            .headers
            .insert(self.name.clone(), self.value.clone());
    }
}
