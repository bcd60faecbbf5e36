//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Twilio Account SID.
///
/// Account SIDs always start with `AC`. The SID appears in most request
/// paths and is the username for HTTP basic authentication.
///
/// # Example
///
/// ```rust
/// use twilio_api::AccountSid;
///
/// let sid = AccountSid::new("AC58f1e8f2b1c6b88ca90a012a4be0c279").unwrap();
/// assert_eq!(sid.as_ref(), "AC58f1e8f2b1c6b88ca90a012a4be0c279");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountSid(String);

impl AccountSid {
    const PREFIX: &'static str = "AC";

    /// Creates a new validated Account SID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccountSid`] if the SID is empty, or
    /// [`ConfigError::InvalidAccountSid`] if it does not start with `AC` or
    /// contains non-alphanumeric characters.
    pub fn new(sid: impl Into<String>) -> Result<Self, ConfigError> {
        let sid = sid.into();
        let sid = sid.trim().to_string();
        if sid.is_empty() {
            return Err(ConfigError::EmptyAccountSid);
        }
        if !sid.starts_with(Self::PREFIX) || !sid.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidAccountSid { sid });
        }
        Ok(Self(sid))
    }
}

impl AsRef<str> for AccountSid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountSid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AccountSid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountSid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Twilio auth token.
///
/// The token is the basic-auth password for outbound requests and the HMAC
/// key for webhook signatures.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `AuthToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use twilio_api::AuthToken;
///
/// let token = AuthToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// A validated base URL used to override a product's API host.
///
/// The URL must carry a scheme and a host. A trailing slash is removed so
/// paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use twilio_api::BaseUrl;
///
/// let url = BaseUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
/// assert_eq!(url.scheme(), "http");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host = &url[scheme_end + 3..];
        let host_end = host.find([':', '/', '?', '#']).unwrap_or(host.len());
        if host[..host_end].is_empty() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
