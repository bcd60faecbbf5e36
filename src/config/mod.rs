//! Configuration types for the Twilio API client.
//!
//! This module provides the configuration used to construct a
//! [`Client`](crate::clients::Client).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`TwilioConfig`]: The configuration struct holding credentials and transport settings
//! - [`TwilioConfigBuilder`]: A builder for constructing [`TwilioConfig`] instances
//! - [`AccountSid`]: A validated account identifier
//! - [`AuthToken`]: A validated auth token with masked debug output
//! - [`BaseUrl`]: A validated host override
//! - [`Product`]: The API product a request is addressed to
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use twilio_api::{TwilioConfig, AccountSid, AuthToken};
//!
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("AC123").unwrap())
//!     .auth_token(AuthToken::new("token").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod product;

pub use newtypes::{AccountSid, AuthToken, BaseUrl};
pub use product::Product;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::Credentials;
use crate::clients::Interceptor;
use crate::error::ConfigError;

/// Default timeout applied to every outbound request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Twilio API client.
///
/// # Thread Safety
///
/// `TwilioConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Token Rotation
///
/// The `secondary_auth_token` field supports rotating the auth token. When
/// validating webhook signatures, the primary token is tried first, then the
/// secondary token if configured.
#[derive(Clone)]
pub struct TwilioConfig {
    credentials: Credentials,
    secondary_auth_token: Option<AuthToken>,
    timeout: Duration,
    follow_redirects: bool,
    interceptors: Vec<Arc<dyn Interceptor>>,
    user_agent_prefix: Option<String>,
    base_urls: HashMap<Product, BaseUrl>,
}

impl TwilioConfig {
    /// Creates a new builder for constructing a `TwilioConfig`.
    #[must_use]
    pub fn builder() -> TwilioConfigBuilder {
        TwilioConfigBuilder::new()
    }

    /// Returns the credentials used for basic authentication.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the account SID.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        self.credentials.account_sid()
    }

    /// Returns the primary auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        self.credentials.auth_token()
    }

    /// Returns the secondary auth token, if configured.
    #[must_use]
    pub const fn secondary_auth_token(&self) -> Option<&AuthToken> {
        self.secondary_auth_token.as_ref()
    }

    /// Returns the default request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether the main transport follows redirects.
    #[must_use]
    pub const fn follow_redirects(&self) -> bool {
        self.follow_redirects
    }

    /// Returns the request interceptors in invocation order.
    #[must_use]
    pub fn interceptors(&self) -> &[Arc<dyn Interceptor>] {
        &self.interceptors
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URL requests for `product` are sent to.
    #[must_use]
    pub fn base_url(&self, product: Product) -> &str {
        self.base_urls
            .get(&product)
            .map_or_else(|| product.default_base_url(), AsRef::as_ref)
    }
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("credentials", &self.credentials)
            .field("secondary_auth_token", &self.secondary_auth_token)
            .field("timeout", &self.timeout)
            .field("follow_redirects", &self.follow_redirects)
            .field("interceptors", &self.interceptors.len())
            .field("user_agent_prefix", &self.user_agent_prefix)
            .field("base_urls", &self.base_urls)
            .finish()
    }
}

// Verify TwilioConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TwilioConfig>();
};

/// Builder for constructing [`TwilioConfig`] instances.
///
/// Required fields are `account_sid` and `auth_token`.
///
/// # Defaults
///
/// - `timeout`: 30 seconds
/// - `follow_redirects`: `true`
/// - `interceptors`: none
/// - `user_agent_prefix`: `None`
/// - `secondary_auth_token`: `None`
/// - base URLs: each product's production host
#[derive(Default)]
pub struct TwilioConfigBuilder {
    account_sid: Option<AccountSid>,
    auth_token: Option<AuthToken>,
    secondary_auth_token: Option<AuthToken>,
    timeout: Option<Duration>,
    follow_redirects: Option<bool>,
    interceptors: Vec<Arc<dyn Interceptor>>,
    user_agent_prefix: Option<String>,
    base_urls: HashMap<Product, BaseUrl>,
}

impl TwilioConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account SID (required).
    #[must_use]
    pub fn account_sid(mut self, sid: AccountSid) -> Self {
        self.account_sid = Some(sid);
        self
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the secondary auth token used as a fallback when validating webhooks.
    #[must_use]
    pub fn secondary_auth_token(mut self, token: AuthToken) -> Self {
        self.secondary_auth_token = Some(token);
        self
    }

    /// Sets the default timeout for every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets whether the main transport follows HTTP redirects.
    #[must_use]
    pub const fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = Some(follow);
        self
    }

    /// Appends a request interceptor.
    #[must_use]
    pub fn interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Overrides the host used for one product.
    #[must_use]
    pub fn base_url(mut self, product: Product, url: BaseUrl) -> Self {
        self.base_urls.insert(product, url);
        self
    }

    /// Overrides the host used for every product.
    #[must_use]
    pub fn base_url_for_all(mut self, url: &BaseUrl) -> Self {
        for product in Product::ALL {
            self.base_urls.insert(product, url.clone());
        }
        self
    }

    /// Builds the [`TwilioConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `account_sid` or
    /// `auth_token` are not set.
    pub fn build(self) -> Result<TwilioConfig, ConfigError> {
        let account_sid = self.account_sid.ok_or(ConfigError::MissingRequiredField {
            field: "account_sid",
        })?;
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;

        Ok(TwilioConfig {
            credentials: Credentials::new(account_sid, auth_token),
            secondary_auth_token: self.secondary_auth_token,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            follow_redirects: self.follow_redirects.unwrap_or(true),
            interceptors: self.interceptors,
            user_agent_prefix: self.user_agent_prefix,
            base_urls: self.base_urls,
        })
    }
}

impl fmt::Debug for TwilioConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfigBuilder")
            .field("account_sid", &self.account_sid)
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}
