//! Message resource implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! let message = client
//!     .messages()
//!     .send("+15017122661", "+15558675310", "Hello from Rust")
//!     .await?;
//!
//! if message.status.is_final() {
//!     println!("{} finished as {:?}", message.sid, message.status);
//! }
//!
//! // Blank the body once it has been delivered
//! client.messages().redact(&message.sid).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError, InvalidHttpRequestError, Params};
use crate::rest::resources::common;
use crate::rest::resources::media::MediaService;
use crate::rest::{
    LegacyPage, ListResource, Page, PageIterator, ResourcePath, TimeRange, TimeRangeIterator,
};
use crate::types::{ErrorCode, NullString, TwilioTime, UintStr};

/// Filter field used by [`MessageService::messages_in_range`].
const DATE_SENT_FIELD: &str = "DateSent";

/// The delivery status of a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Accepted,
    Scheduled,
    Queued,
    Sending,
    Sent,
    Receiving,
    Received,
    Delivered,
    Undelivered,
    Failed,
    Read,
    Canceled,
    /// A status this library does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl MessageStatus {
    /// Returns `true` for statuses that will not change again.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(
            self,
            Self::Delivered
                | Self::Undelivered
                | Self::Failed
                | Self::Received
                | Self::Read
                | Self::Canceled
        )
    }
}

/// Which way a message travelled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MessageDirection {
    Inbound,
    OutboundApi,
    OutboundCall,
    OutboundReply,
    #[default]
    #[serde(other)]
    Unknown,
}

/// An SMS, MMS or chat message.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Message {
    /// The message SID.
    pub sid: String,
    /// The owning account.
    pub account_sid: String,
    /// The messaging service used, if any.
    pub messaging_service_sid: NullString,
    /// The recipient.
    pub to: String,
    /// The sender.
    pub from: NullString,
    /// Message text; empty once redacted.
    pub body: String,
    pub status: MessageStatus,
    pub direction: MessageDirection,
    /// Number of segments the body was split into.
    pub num_segments: UintStr,
    /// Number of attached media files.
    pub num_media: UintStr,
    /// Cost of the message, a negative decimal string.
    pub price: NullString,
    /// Currency of `price`.
    pub price_unit: NullString,
    /// Delivery error, zero when there was none.
    pub error_code: ErrorCode,
    /// Human-readable delivery error.
    pub error_message: NullString,
    /// When the message was sent or received.
    pub date_sent: TwilioTime,
    /// When the resource was created.
    pub date_created: TwilioTime,
    /// When the resource was last updated.
    pub date_updated: TwilioTime,
    /// Path of this resource.
    pub uri: String,
}

impl ListResource for Message {
    const KEY: &'static str = "messages";
    type Envelope = LegacyPage<Self>;
}

/// Filters for listing messages.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct MessageListParams {
    /// Only messages to this number.
    #[serde(rename = "To", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Only messages from this number.
    #[serde(rename = "From", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Only messages sent on this day (`YYYY-MM-DD`).
    #[serde(rename = "DateSent", skip_serializing_if = "Option::is_none")]
    pub date_sent: Option<String>,
    /// Records per page.
    #[serde(rename = "PageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Fields for sending a message.
///
/// Either `from` or `messaging_service_sid` is required, and either `body`
/// or at least one `media_url`.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct MessageCreateParams {
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "From", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(rename = "MessagingServiceSid", skip_serializing_if = "Option::is_none")]
    pub messaging_service_sid: Option<String>,
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Media to attach; sent as repeated `MediaUrl` fields.
    #[serde(rename = "MediaUrl", skip_serializing_if = "Vec::is_empty")]
    pub media_url: Vec<String>,
    #[serde(rename = "StatusCallback", skip_serializing_if = "Option::is_none")]
    pub status_callback: Option<String>,
}

/// Fields for updating a message. Only the body can change, and only to
/// an empty string.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct MessageUpdateParams {
    #[serde(rename = "Body")]
    pub body: String,
}

/// Operations on messages.
#[derive(Debug, Clone, Copy)]
pub struct MessageService<'c> {
    client: &'c Client,
}

impl<'c> MessageService<'c> {
    /// Creates a service handle.
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn collection() -> ResourcePath {
        ResourcePath::account("Messages")
    }

    /// Fetches a message by SID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, sid: &str) -> Result<Message, HttpError> {
        common::fetch(self.client, &Self::collection().id(sid), Params::new()).await
    }

    /// Sends a message.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, params: &MessageCreateParams) -> Result<Message, HttpError> {
        common::submit(self.client, &Self::collection(), params).await
    }

    /// Sends a plain text message.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn send(&self, from: &str, to: &str, body: &str) -> Result<Message, HttpError> {
        let params = MessageCreateParams {
            to: to.to_string(),
            from: Some(from.to_string()),
            body: Some(body.to_string()),
            ..Default::default()
        };
        self.create(&params).await
    }

    /// Erases the body of a message, keeping its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn redact(&self, sid: &str) -> Result<Message, HttpError> {
        let params = MessageUpdateParams {
            body: String::new(),
        };
        common::submit(self.client, &Self::collection().id(sid), &params).await
    }

    /// Deletes a message.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, sid: &str) -> Result<(), HttpError> {
        common::remove(self.client, &Self::collection().id(sid)).await
    }

    /// Fetches the first page of messages.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_page(&self, params: &MessageListParams) -> Result<Page<Message>, HttpError> {
        common::fetch_page(self.client, &Self::collection(), params).await
    }

    /// Pages through messages.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the filters cannot be encoded.
    pub fn page_iterator(
        &self,
        params: &MessageListParams,
    ) -> Result<PageIterator<'c, Message>, InvalidHttpRequestError> {
        common::iterate(self.client, &Self::collection(), params)
    }

    /// Pages through messages sent within `range`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the filters cannot be encoded.
    pub fn messages_in_range(
        &self,
        params: &MessageListParams,
        range: TimeRange,
    ) -> Result<TimeRangeIterator<'c, Message>, InvalidHttpRequestError> {
        let inner = self.page_iterator(params)?;
        Ok(TimeRangeIterator::new(inner, DATE_SENT_FIELD, range))
    }

    /// Returns the media service for one message.
    #[must_use]
    pub fn media(&self, message_sid: &str) -> MediaService<'c> {
        MediaService::new(self.client, message_sid)
    }
}

impl Client {
    /// Returns the message service.
    #[must_use]
    pub const fn messages(&self) -> MessageService<'_> {
        MessageService::new(self)
    }
}
