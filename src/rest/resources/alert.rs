//! Monitor alert implementation.
//!
//! Alerts are served by the Monitor product and list in the `meta`
//! envelope, so paging follows `next_page_url` rather than `next_page_uri`.

use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError, InvalidHttpRequestError, Params};
use crate::config::Product;
use crate::rest::resources::common;
use crate::rest::{ListResource, MetaPage, Page, PageIterator, ResourcePath};
use crate::types::{ErrorCode, TwilioTime};

/// Severity of an alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    Notice,
    Debug,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A debugger alert raised for the account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Alert {
    pub sid: String,
    pub account_sid: String,
    /// The error or warning code.
    pub error_code: ErrorCode,
    pub log_level: LogLevel,
    /// Form-encoded description of the failure.
    pub alert_text: Option<String>,
    /// Link to the error's documentation.
    pub more_info: Option<String>,
    /// The resource the alert concerns, e.g. a call SID.
    pub resource_sid: Option<String>,
    /// The URL requested when the alert was raised.
    pub request_url: Option<String>,
    pub request_method: Option<String>,
    pub date_generated: TwilioTime,
    pub date_created: TwilioTime,
    pub date_updated: TwilioTime,
    pub url: String,
}

impl ListResource for Alert {
    const KEY: &'static str = "alerts";
    type Envelope = MetaPage<Self>;
}

/// Filters for listing alerts.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct AlertListParams {
    #[serde(rename = "LogLevel", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    /// Only alerts on or after this day (`YYYY-MM-DD`).
    #[serde(rename = "StartDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Only alerts on or before this day (`YYYY-MM-DD`).
    #[serde(rename = "EndDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "PageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Operations on alerts.
#[derive(Debug, Clone, Copy)]
pub struct AlertService<'c> {
    client: &'c Client,
}

impl<'c> AlertService<'c> {
    /// Creates a service handle.
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn collection() -> ResourcePath {
        ResourcePath::root(Product::Monitor, "Alerts")
    }

    /// Fetches an alert by SID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, sid: &str) -> Result<Alert, HttpError> {
        common::fetch(self.client, &Self::collection().id(sid), Params::new()).await
    }

    /// Fetches the first page of alerts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_page(&self, params: &AlertListParams) -> Result<Page<Alert>, HttpError> {
        common::fetch_page(self.client, &Self::collection(), params).await
    }

    /// Pages through alerts.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the filters cannot be encoded.
    pub fn page_iterator(
        &self,
        params: &AlertListParams,
    ) -> Result<PageIterator<'c, Alert>, InvalidHttpRequestError> {
        common::iterate(self.client, &Self::collection(), params)
    }
}

impl Client {
    /// Returns the alert service.
    #[must_use]
    pub const fn alerts(&self) -> AlertService<'_> {
        AlertService::new(self)
    }
}
