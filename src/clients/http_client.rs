//! HTTP client for Twilio API communication.
//!
//! This module provides [`Client`], which authenticates, sends and decodes
//! every request made by the library.

use std::collections::HashMap;
use std::future::Future;

use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;

use crate::clients::errors::{ApiError, HttpError};
use crate::clients::http_request::{HttpMethod, HttpRequest, Target};
use crate::clients::http_response::HttpResponse;
use crate::config::{AccountSid, TwilioConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Twilio API.
///
/// The client handles:
/// - URL construction from the configured product base URLs
/// - HTTP basic authentication with the account credentials
/// - Default headers (`User-Agent`, `Accept: application/json`)
/// - Query strings for `GET`/`DELETE` and form bodies for `POST`/`PUT`
/// - Mapping non-2xx answers to [`ApiError`]
///
/// No request is retried automatically.
///
/// # Thread Safety
///
/// `Client` is `Clone`, `Send` and `Sync`. Clones share connection pools.
///
/// # Example
///
/// ```rust,ignore
/// use twilio_api::{AccountSid, AuthToken, Client, TwilioConfig};
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("AC123")?)
///     .auth_token(AuthToken::new("token")?)
///     .build()?;
/// let client = Client::new(config)?;
///
/// let call = client.calls().get("CA123").await?;
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    config: TwilioConfig,
    /// Transport honouring the configured redirect policy.
    http: reqwest::Client,
    /// Transport that never follows redirects, used to resolve media URLs.
    no_redirect: reqwest::Client,
    default_headers: HashMap<String, String>,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialised.
    pub fn new(config: TwilioConfig) -> Result<Self, HttpError> {
        let redirect = if config.follow_redirects() {
            Policy::default()
        } else {
            Policy::none()
        };
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .redirect(redirect)
            .build()?;
        let no_redirect = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .redirect(Policy::none())
            .build()?;

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}twilio-api-rust v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Ok(Self {
            config,
            http,
            no_redirect,
            default_headers,
        })
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &TwilioConfig {
        &self.config
    }

    /// Returns the account SID requests are made for.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        self.config.account_sid()
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the absolute URL a target resolves to.
    #[must_use]
    pub fn resolve_url(&self, target: &Target) -> String {
        match target {
            Target::Path { product, path } => {
                format!("{}{}", self.config.base_url(*product), path)
            }
            Target::Url(url) => url.clone(),
        }
    }

    /// Sends a request and returns the raw response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if validation fails, or
    /// [`HttpError::Network`] if no response is obtained.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.dispatch(&self.http, request).await
    }

    /// Sends a request and decodes a 2xx body into `T`.
    ///
    /// Only the first JSON value of the body is decoded.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] for a non-2xx answer and
    /// [`HttpError::Decode`] if a 2xx body does not match `T`, in addition to
    /// the errors of [`send`](Self::send).
    pub async fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, HttpError> {
        let response = self.send(request).await?;
        let response = Self::check_status(response)?;
        response.decode().map_err(|source| HttpError::Decode {
            status: response.code,
            source,
        })
    }

    /// Sends a request whose successful answer has no body, such as a `DELETE`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] for a non-2xx answer, in addition to the
    /// errors of [`send`](Self::send).
    pub async fn execute_no_content(&self, request: HttpRequest) -> Result<(), HttpError> {
        let response = self.send(request).await?;
        Self::check_status(response).map(|_| ())
    }

    /// Like [`execute`](Self::execute), but gives up as soon as `cancel`
    /// completes.
    ///
    /// The in-flight request is dropped on cancellation, which closes its
    /// connection.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Cancelled`] if `cancel` completes first, otherwise
    /// the errors of [`execute`](Self::execute).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let deadline = tokio::time::sleep(Duration::from_millis(250));
    /// let account: Account = client.execute_with_cancel(request, deadline).await?;
    /// ```
    pub async fn execute_with_cancel<T, F>(
        &self,
        request: HttpRequest,
        cancel: F,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        F: Future<Output = ()>,
    {
        tokio::select! {
            result = self.execute(request) => result,
            () = cancel => {
                tracing::debug!("request cancelled by caller");
                Err(HttpError::Cancelled)
            }
        }
    }

    /// Sends a request without following redirects and returns the
    /// `Location` it redirects to.
    ///
    /// This ignores the configured redirect policy.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] for a 4xx/5xx answer and
    /// [`HttpError::MissingRedirect`] when the answer is not a redirect with a
    /// `Location` header.
    pub async fn resolve_redirect(&self, request: HttpRequest) -> Result<String, HttpError> {
        let response = self.dispatch(&self.no_redirect, request).await?;
        if response.is_redirect() {
            return response
                .location()
                .map(String::from)
                .ok_or(HttpError::MissingRedirect {
                    status: response.code,
                });
        }
        let response = Self::check_status(response)?;
        Err(HttpError::MissingRedirect {
            status: response.code,
        })
    }

    fn check_status(response: HttpResponse) -> Result<HttpResponse, HttpError> {
        if response.is_ok() {
            Ok(response)
        } else {
            Err(ApiError::from_response(response.code, &response.body).into())
        }
    }

    async fn dispatch(
        &self,
        transport: &reqwest::Client,
        mut request: HttpRequest,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        for interceptor in self.config.interceptors() {
            interceptor.intercept(&mut request);
        }

        let url = self.resolve_url(&request.target);
        tracing::debug!(method = %request.method, url = %url, "sending request");

        let mut req_builder = match request.method {
            HttpMethod::Get => transport.get(&url),
            HttpMethod::Post => transport.post(&url),
            HttpMethod::Put => transport.put(&url),
            HttpMethod::Delete => transport.delete(&url),
        };

        let mut headers = self.default_headers.clone();
        headers.extend(request.headers);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        let (user, password) = self.config.credentials().basic_auth();
        req_builder = req_builder.basic_auth(user, Some(password));

        if request.method.uses_query() {
            if !request.params.is_empty() {
                req_builder = req_builder.query(request.params.as_slice());
            }
        } else {
            req_builder = req_builder.form(request.params.as_slice());
        }

        if let Some(timeout) = request.timeout {
            req_builder = req_builder.timeout(timeout);
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        // Reading to the end returns the connection to the pool.
        let body = res.bytes().await?.to_vec();

        tracing::debug!(status = code, url = %url, "received response");
        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
