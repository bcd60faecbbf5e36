//! Call resource implementation.
//!
//! This module provides the [`Call`] record and [`CallService`] for placing,
//! modifying and listing voice calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::{TimeZone, Utc};
//! use twilio_api::rest::TimeRange;
//! use twilio_api::rest::resources::{CallCreateParams, CallListParams};
//!
//! // Place a call
//! let call = client
//!     .calls()
//!     .create(&CallCreateParams {
//!         to: "+15558675310".to_string(),
//!         from: "+15017122661".to_string(),
//!         url: Some("https://demo.twilio.com/docs/voice.xml".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Hang up
//! client.calls().hangup(&call.sid).await?;
//!
//! // Every call started in March
//! let range = TimeRange::new(
//!     Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
//! )?;
//! let mut pages = client.calls().calls_in_range(&CallListParams::default(), range)?;
//! while let Some(page) = pages.next().await? {
//!     println!("{} calls", page.len());
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError, InvalidHttpRequestError, Params};
use crate::rest::resources::common;
use crate::rest::resources::recording::{Recording, RecordingListParams};
use crate::rest::{
    LegacyPage, ListResource, Page, PageIterator, ResourcePath, TimeRange, TimeRangeIterator,
};
use crate::types::{NullString, TwilioDuration, TwilioTime};

/// Filter field used by [`CallService::calls_in_range`].
const START_TIME_FIELD: &str = "StartTime";

/// The status of a call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CallStatus {
    /// Waiting to be dialed.
    Queued,
    /// The destination is ringing.
    Ringing,
    /// The call was answered and is connected.
    InProgress,
    /// Hung up before it was answered.
    Canceled,
    /// Answered and ended normally.
    Completed,
    /// Could not be completed.
    Failed,
    /// The destination was busy.
    Busy,
    /// Nobody answered.
    NoAnswer,
    /// A status this library does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl CallStatus {
    /// Returns `true` once the call can no longer change.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Canceled | Self::Completed | Self::Failed | Self::Busy | Self::NoAnswer
        )
    }
}

/// A voice call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Call {
    /// The call SID.
    pub sid: String,
    /// The owning account.
    pub account_sid: String,
    /// The call that created this one, for dialed legs.
    pub parent_call_sid: NullString,
    /// The dialed party.
    pub to: String,
    /// `to` formatted for display.
    pub to_formatted: String,
    /// The caller.
    pub from: String,
    /// `from` formatted for display.
    pub from_formatted: String,
    /// Current status.
    pub status: CallStatus,
    /// `inbound`, `outbound-api` or `outbound-dial`.
    pub direction: String,
    /// When the call was answered.
    pub start_time: TwilioTime,
    /// When the call ended.
    pub end_time: TwilioTime,
    /// Length of the call; null until it ends.
    pub duration: TwilioDuration,
    /// Cost of the call, a negative decimal string.
    pub price: NullString,
    /// Currency of `price`.
    pub price_unit: NullString,
    /// `human` or `machine` when answering machine detection ran.
    pub answered_by: NullString,
    /// The forwarding number, if the carrier reported one.
    pub forwarded_from: NullString,
    /// Caller ID name, if looked up.
    pub caller_name: NullString,
    /// When the resource was created.
    pub date_created: TwilioTime,
    /// When the resource was last updated.
    pub date_updated: TwilioTime,
    /// Path of this resource.
    pub uri: String,
}

impl ListResource for Call {
    const KEY: &'static str = "calls";
    type Envelope = LegacyPage<Self>;
}

/// Filters for listing calls.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CallListParams {
    /// Only calls to this number.
    #[serde(rename = "To", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Only calls from this number.
    #[serde(rename = "From", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Only child legs of this call.
    #[serde(rename = "ParentCallSid", skip_serializing_if = "Option::is_none")]
    pub parent_call_sid: Option<String>,
    /// Only calls in this status.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<CallStatus>,
    /// Only calls started on this day (`YYYY-MM-DD`).
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Only calls ended on this day (`YYYY-MM-DD`).
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Records per page.
    #[serde(rename = "PageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Fields for placing a call.
///
/// One of `url`, `twiml` or `application_sid` is required.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CallCreateParams {
    /// The number, SIP address or client identifier to call.
    #[serde(rename = "To")]
    pub to: String,
    /// The caller ID; must be a number on the account.
    #[serde(rename = "From")]
    pub from: String,
    /// URL returning TwiML instructions for the call.
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Inline TwiML instructions.
    #[serde(rename = "Twiml", skip_serializing_if = "Option::is_none")]
    pub twiml: Option<String>,
    /// An application whose voice URL handles the call.
    #[serde(rename = "ApplicationSid", skip_serializing_if = "Option::is_none")]
    pub application_sid: Option<String>,
    /// HTTP method used to request `url`.
    #[serde(rename = "Method", skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// URL notified of status changes.
    #[serde(rename = "StatusCallback", skip_serializing_if = "Option::is_none")]
    pub status_callback: Option<String>,
    /// Events that trigger `status_callback`.
    #[serde(rename = "StatusCallbackEvent", skip_serializing_if = "Vec::is_empty")]
    pub status_callback_event: Vec<String>,
    /// HTTP method used to request `status_callback`.
    #[serde(rename = "StatusCallbackMethod", skip_serializing_if = "Option::is_none")]
    pub status_callback_method: Option<String>,
    /// Digits to send once the call connects.
    #[serde(rename = "SendDigits", skip_serializing_if = "Option::is_none")]
    pub send_digits: Option<String>,
    /// Seconds to let the call ring.
    #[serde(rename = "Timeout", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    /// Whether to record the call.
    #[serde(rename = "Record", skip_serializing_if = "Option::is_none")]
    pub record: Option<bool>,
}

/// Fields for modifying a live call.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CallUpdateParams {
    /// Redirect the call to new TwiML at this URL.
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// HTTP method used to request `url`.
    #[serde(rename = "Method", skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// `canceled` or `completed` to end the call.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<CallStatus>,
    /// Replace the call's instructions with inline TwiML.
    #[serde(rename = "Twiml", skip_serializing_if = "Option::is_none")]
    pub twiml: Option<String>,
    /// URL notified of status changes.
    #[serde(rename = "StatusCallback", skip_serializing_if = "Option::is_none")]
    pub status_callback: Option<String>,
}

/// Operations on calls.
#[derive(Debug, Clone, Copy)]
pub struct CallService<'c> {
    client: &'c Client,
}

impl<'c> CallService<'c> {
    /// Creates a service handle.
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn collection() -> ResourcePath {
        ResourcePath::account("Calls")
    }

    /// Fetches a call by SID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, sid: &str) -> Result<Call, HttpError> {
        common::fetch(self.client, &Self::collection().id(sid), Params::new()).await
    }

    /// Places a call.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, params: &CallCreateParams) -> Result<Call, HttpError> {
        common::submit(self.client, &Self::collection(), params).await
    }

    /// Modifies a live call.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update(&self, sid: &str, params: &CallUpdateParams) -> Result<Call, HttpError> {
        common::submit(self.client, &Self::collection().id(sid), params).await
    }

    /// Ends a call that is in progress.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn hangup(&self, sid: &str) -> Result<Call, HttpError> {
        self.set_status(sid, CallStatus::Completed).await
    }

    /// Cancels a call that is queued or ringing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn cancel(&self, sid: &str) -> Result<Call, HttpError> {
        self.set_status(sid, CallStatus::Canceled).await
    }

    async fn set_status(&self, sid: &str, status: CallStatus) -> Result<Call, HttpError> {
        let params = CallUpdateParams {
            status: Some(status),
            ..Default::default()
        };
        self.update(sid, &params).await
    }

    /// Deletes a call record.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, sid: &str) -> Result<(), HttpError> {
        common::remove(self.client, &Self::collection().id(sid)).await
    }

    /// Fetches the first page of calls.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_page(&self, params: &CallListParams) -> Result<Page<Call>, HttpError> {
        common::fetch_page(self.client, &Self::collection(), params).await
    }

    /// Pages through calls.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the filters cannot be encoded.
    pub fn page_iterator(
        &self,
        params: &CallListParams,
    ) -> Result<PageIterator<'c, Call>, InvalidHttpRequestError> {
        common::iterate(self.client, &Self::collection(), params)
    }

    /// Pages through calls started within `range`.
    ///
    /// Any `start_time` filter in `params` is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the filters cannot be encoded.
    pub fn calls_in_range(
        &self,
        params: &CallListParams,
        range: TimeRange,
    ) -> Result<TimeRangeIterator<'c, Call>, InvalidHttpRequestError> {
        let inner = self.page_iterator(params)?;
        Ok(TimeRangeIterator::new(inner, START_TIME_FIELD, range))
    }

    /// Pages through the recordings of one call.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the filters cannot be encoded.
    pub fn recordings(
        &self,
        call_sid: &str,
        params: &RecordingListParams,
    ) -> Result<PageIterator<'c, Recording>, InvalidHttpRequestError> {
        let path = Self::collection().id(call_sid).nested("Recordings");
        common::iterate(self.client, &path, params)
    }
}

impl Client {
    /// Returns the call service.
    #[must_use]
    pub const fn calls(&self) -> CallService<'_> {
        CallService::new(self)
    }
}
