//! HTTP client types for Twilio API communication.
//!
//! This module provides the request executor used by every resource service.
//! It authenticates requests, encodes parameters, decodes JSON responses and
//! normalizes failures into [`HttpError`].
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Client`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A fully-read response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Target`]: A product-relative path or an absolute URL
//! - [`Params`]: Ordered, multi-valued form and query fields
//! - [`Interceptor`]: A hook run on every outbound request
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::clients::{Client, HttpMethod, HttpRequest, Target};
//! use twilio_api::Product;
//!
//! let client = Client::new(config)?;
//!
//! let request = HttpRequest::builder(
//!     HttpMethod::Get,
//!     Target::path(Product::Api, "/2010-04-01/Accounts/AC123.json"),
//! )
//! .build()?;
//!
//! let account: serde_json::Value = client.execute(request).await?;
//! ```
//!
//! # Cancellation
//!
//! Every call is an ordinary future; dropping it abandons the request and
//! releases its connection. [`Client::execute_with_cancel`] races a request
//! against a caller-supplied future and reports [`HttpError::Cancelled`].
//! Timeouts come from the configuration and may be overridden per request.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod interceptor;

pub use errors::{ApiError, HttpError, InvalidHttpRequestError, NOT_FOUND_CODE};
pub use http_client::{Client, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, Params, Target};
pub use http_response::{HttpResponse, REQUEST_ID_HEADER};
pub use interceptor::{HeaderInterceptor, Interceptor};
