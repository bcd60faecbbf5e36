//! HTTP request types for the Twilio API client.
//!
//! This module provides [`HttpRequest`] and its builder, the [`Target`] a
//! request is addressed to, and [`Params`], the ordered list of form or query
//! fields sent with it.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;
use crate::config::Product;

/// HTTP methods used by the Twilio API.
///
/// Updates are sent as `Post`; `Put` is kept for completeness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP PUT method.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if parameters travel in the query string.
    #[must_use]
    pub const fn uses_query(&self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// An ordered, multi-valued list of form or query fields.
///
/// Order is preserved on the wire. Repeated names are allowed, which the API
/// uses for list-valued fields such as `MediaUrl` or `StatusCallbackEvent`.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::Params;
///
/// let mut params = Params::new();
/// params.set("To", "+15558675310");
/// params.add("MediaUrl", "https://example.com/a.png");
/// params.add("MediaUrl", "https://example.com/b.png");
///
/// assert_eq!(params.get("To"), Some("+15558675310"));
/// assert_eq!(params.get_all("MediaUrl").len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Converts a serializable struct into parameters.
    ///
    /// The value must serialize to a JSON object. `null` fields are skipped,
    /// arrays become repeated names and scalars are rendered as text. Nested
    /// objects are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::Params`] if the value is not an
    /// object of scalars and arrays of scalars.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use twilio_api::clients::Params;
    ///
    /// #[derive(Serialize)]
    /// struct Filter {
    ///     #[serde(rename = "To")]
    ///     to: Option<String>,
    ///     #[serde(rename = "PageSize")]
    ///     page_size: u32,
    /// }
    ///
    /// let params = Params::from_serialize(&Filter { to: None, page_size: 50 }).unwrap();
    /// assert_eq!(params.get("PageSize"), Some("50"));
    /// assert!(!params.contains("To"));
    /// ```
    pub fn from_serialize<T: Serialize + ?Sized>(
        value: &T,
    ) -> Result<Self, InvalidHttpRequestError> {
        let value = serde_json::to_value(value).map_err(|e| InvalidHttpRequestError::Params {
            reason: e.to_string(),
        })?;

        let fields = match value {
            Value::Object(fields) => fields,
            Value::Null => return Ok(Self::new()),
            other => {
                return Err(InvalidHttpRequestError::Params {
                    reason: format!("expected an object, got {other}"),
                })
            }
        };

        let mut params = Self::new();
        for (name, value) in fields {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = scalar_text(&name, item)? {
                            params.add(name.clone(), text);
                        }
                    }
                }
                other => {
                    if let Some(text) = scalar_text(&name, other)? {
                        params.add(name, text);
                    }
                }
            }
        }
        Ok(params)
    }

    /// Replaces every value of `name` with a single value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.0.retain(|(n, _)| *n != name);
        self.0.push((name, value.into()));
    }

    /// Appends a value without touching existing values of `name`.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Returns the first value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value of `name` in insertion order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Removes every value of `name`.
    pub fn remove(&mut self, name: &str) {
        self.0.retain(|(n, _)| n != name);
    }

    /// Removes every field whose name matches `predicate`.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&str) -> bool) {
        self.0.retain(|(n, _)| !predicate(n));
    }

    /// Returns `true` if `name` has at least one value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(n, _)| n == name)
    }

    /// Returns `true` if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of name/value pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over name/value pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Returns the pairs as a slice, suitable for URL encoding.
    #[must_use]
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }
}

fn scalar_text(name: &str, value: Value) -> Result<Option<String>, InvalidHttpRequestError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(_) | Value::Object(_) => Err(InvalidHttpRequestError::Params {
            reason: format!("field '{name}' is not a scalar"),
        }),
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

/// Where a request is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A path under a product's base URL, e.g. `/2010-04-01/Accounts.json`.
    ///
    /// The path may carry its own query string.
    Path {
        /// The product whose base URL is used.
        product: Product,
        /// The path, starting with `/`.
        path: String,
    },
    /// An absolute URL, used as given.
    Url(String),
}

impl Target {
    /// Creates a path target.
    #[must_use]
    pub fn path(product: Product, path: impl Into<String>) -> Self {
        Self::Path {
            product,
            path: path.into(),
        }
    }

    fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match self {
            Self::Path { path, .. } if !path.starts_with('/') => {
                Err(InvalidHttpRequestError::InvalidPath { path: path.clone() })
            }
            Self::Url(url) if !(url.starts_with("https://") || url.starts_with("http://")) => {
                Err(InvalidHttpRequestError::InvalidUrl { url: url.clone() })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path { product, path } => write!(f, "{product}:{path}"),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// An HTTP request to be sent to the Twilio API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::{HttpMethod, HttpRequest, Target};
/// use twilio_api::Product;
///
/// let request = HttpRequest::builder(
///     HttpMethod::Post,
///     Target::path(Product::Api, "/2010-04-01/Accounts/AC123/Messages.json"),
/// )
/// .param("To", "+15558675310")
/// .param("Body", "Hello")
/// .build()
/// .unwrap();
///
/// assert_eq!(request.params.get("Body"), Some("Hello"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// Where the request is sent.
    pub target: Target,
    /// Query fields for `GET`/`DELETE`, form fields otherwise.
    pub params: Params,
    /// Additional headers to include in the request.
    pub headers: HashMap<String, String>,
    /// Overrides the configured timeout for this request.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, target: Target) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, target)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if a path target does not start
    /// with `/`, a URL target is not absolute `http(s)`, or a `DELETE`
    /// carries parameters.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.method == HttpMethod::Delete && !self.params.is_empty() {
            return Err(InvalidHttpRequestError::ParamsNotAllowed {
                method: self.method.to_string(),
            });
        }
        self.target.verify()
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    target: Target,
    params: Params,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, target: Target) -> Self {
        Self {
            method,
            target,
            params: Params::new(),
            headers: HashMap::new(),
            timeout: None,
        }
    }

    /// Replaces all parameters at once.
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Appends a single parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.add(name, value);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Overrides the configured timeout for this request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            method: self.method,
            target: self.target,
            params: self.params,
            headers: self.headers,
            timeout: self.timeout,
        };
        request.verify()?;
        Ok(request)
    }
}
